use yew::prelude::*;

use crate::model::{TileCoord, TileKind};

#[derive(Properties, PartialEq, Clone)]
pub struct HudPanelProps {
    pub zoom: u8,
    pub selected: Option<TileCoord>,
    pub selected_kind: Option<TileKind>,
    pub buildings: usize,
}

#[function_component]
pub fn HudPanel(props: &HudPanelProps) -> Html {
    let row_style = "display:flex; align-items:center; gap:8px;"; // label | value
    let label_style = "flex:1; font-weight:500;";
    let value_style =
        "min-width:70px; text-align:right; font-variant-numeric:tabular-nums; font-weight:600;";
    let tile_text = match props.selected {
        Some(t) => format!("{}.{}", t.column, t.row),
        None => "-".to_string(),
    };
    let kind_text = props
        .selected_kind
        .map(|k| k.label())
        .unwrap_or_else(|| "-".to_string());
    html! {
        <div style="position:absolute; top:12px; left:12px; background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:10px 14px; min-width:200px; display:flex; flex-direction:column; gap:8px; font-size:14px; color:#ddd;">
            <div style={row_style}>
                <span style={label_style}>{"Zoom"}</span>
                <span style={value_style}>{ format!("x{}", props.zoom) }</span>
            </div>
            <div style={row_style}>
                <span style={label_style}>{"Tile"}</span>
                <span style={value_style}>{ tile_text }</span>
            </div>
            <div style={row_style}>
                <span style={label_style}>{"Kind"}</span>
                <span style={value_style}>{ kind_text }</span>
            </div>
            <div style={row_style}>
                <span style={label_style}>{"Buildings"}</span>
                <span style={value_style}>{ props.buildings }</span>
            </div>
        </div>
    }
}
