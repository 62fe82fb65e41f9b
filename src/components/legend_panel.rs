use super::legend::LegendRow;
use crate::render::{COLOR_BUILDING, COLOR_GROUND, COLOR_SELECT};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct LegendPanelProps {
    #[prop_or(false)]
    pub highlight_ground: bool,
    #[prop_or(false)]
    pub highlight_building: bool,
}

#[function_component]
pub fn LegendPanel(props: &LegendPanelProps) -> Html {
    html! {<div style="position:absolute; right:12px; bottom:12px; background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:8px; min-width:140px; color:#ddd;">
        <div style="font-weight:600; margin-bottom:4px;">{"Legend"}</div>
        <LegendRow color={COLOR_GROUND} label="Ground" highlight={props.highlight_ground}/>
        <LegendRow color={COLOR_BUILDING} label="Building" highlight={props.highlight_building}/>
        <LegendRow color={COLOR_SELECT} label="Selected"/>
    </div>}
}
