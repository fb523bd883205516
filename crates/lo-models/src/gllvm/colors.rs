use lo_core::data::order_ascending;
use lo_viz::Color;
use lo_viz::color::{ordinal_color, rainbow};

/// Largest response count drawn with the ordinal palette
const ORDINAL_LIMIT: usize = 7;

/// One color per response.
///
/// User colors are used as given. Otherwise responses are ranked by
/// total abundance: up to seven responses take ordinal palette entries,
/// more take `p + 1` evenly spaced hues minus the leading red.
pub fn response_colors(totals: &[f64], user: Option<&[Color]>) -> Vec<Color> {
    if let Some(colors) = user {
        return colors.to_vec();
    }

    let p = totals.len();
    let order = order_ascending(totals);
    if p <= ORDINAL_LIMIT {
        order.iter().map(|&j| ordinal_color(j + 1)).collect()
    } else {
        let hues = rainbow(p + 1);
        order.iter().map(|&j| hues[j + 1]).collect()
    }
}
