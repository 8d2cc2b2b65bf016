use web_sys::{Element, MouseEvent};
use yew::{classes, html, Callback, Component, Context, Html, NodeRef, Properties, TargetCast};

/// Full-screen overlay used by the photo viewer.
///
/// Visibility is driven by `open`. A click on the backdrop itself (not on the
/// content inside it) emits `on_dismiss`. Yew delegates listeners to the app
/// root, so the backdrop is recognised by comparing the event target against
/// the overlay's own node rather than `current_target`.
pub struct Overlay {
    backdrop: NodeRef,
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub open: bool,
    pub on_dismiss: Callback<()>,
    #[prop_or_default]
    pub children: Html,
}

impl Component for Overlay {
    type Message = ();
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            backdrop: NodeRef::default(),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let on_backdrop = {
            let on_dismiss = props.on_dismiss.clone();
            let backdrop = self.backdrop.clone();
            Callback::from(move |e: MouseEvent| {
                let target = e.target_dyn_into::<Element>();
                if is_backdrop_click(target, backdrop.cast::<Element>()) {
                    on_dismiss.emit(());
                }
            })
        };
        let style = format!(
            "position:fixed;top:0;left:0;width:100vw;height:100vh;background:rgba(0,0,0,0.85);z-index:9999;\
             display:{};flex-direction:column;align-items:center;justify-content:center;",
            if props.open { "flex" } else { "none" }
        );

        html! {
            <div
                ref={self.backdrop.clone()}
                class={classes!("modal", props.open.then_some("show"))}
                aria-hidden={(!props.open).to_string()}
                style={style}
                onclick={on_backdrop}
            >
                { props.children.clone() }
            </div>
        }
    }
}

/// True when the click landed on the backdrop element itself.
fn is_backdrop_click<T: PartialEq>(target: Option<T>, backdrop: Option<T>) -> bool {
    matches!((target, backdrop), (Some(target), Some(backdrop)) if target == backdrop)
}
