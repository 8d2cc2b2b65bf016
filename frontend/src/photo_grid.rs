use yew::{html, Children, Component, Context, Html, Properties};

#[derive(Properties, PartialEq)]
pub struct PhotoGridProps {
    /// Narrowest a tile may get before the grid drops a column.
    #[prop_or(160)]
    pub min_tile_px: u32,
    pub children: Children,
}

pub struct PhotoGrid;

impl Component for PhotoGrid {
    type Message = ();
    type Properties = PhotoGridProps;

    fn create(_ctx: &Context<Self>) -> Self {
        PhotoGrid
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let style = format!(
            "display: grid;
             grid-template-columns: repeat(auto-fill, minmax({}px, 1fr));
             gap: 12px;
             margin-top: 12px;",
            props.min_tile_px
        );

        html! {
            <div id="gallery-grid" class="gallery-grid" style={style}>
                { for props.children.iter() }
            </div>
        }
    }
}
