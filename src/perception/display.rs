// Text rendering of analysis layers, one bracketed row per line.
// Zero cells render as `_` so shapes stand out.

use crate::core::Layer;

pub const PLACEHOLDER: char = '_';

pub fn render_layer(layer: &Layer) -> String {
    let mut out = String::new();
    for row in layer {
        let cells: Vec<String> = row
            .iter()
            .map(|&v| if v == 0 { PLACEHOLDER.to_string() } else { v.to_string() })
            .collect();
        out.push('[');
        out.push_str(&cells.join(", "));
        out.push_str("]\n");
    }
    out
}
