use crate::components::cart_sidebar::CartSidebar;
use crate::containers::header::Header;
use yew::{classes, function_component, html, Children, Html, Properties};

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub children: Children,
}

#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    html! {
    <>
        <Header />
        <div class="min-h-screen bg-base-100 flex flex-col">
            <main class={classes!("flex-grow", "p-4")}>
                {props.children.clone()}
            </main>
            <footer class="footer footer-center p-4 border-t border-base-300 text-base-content">
                <div>
                    <p>{"© 2026 Maya Bay · Curadoria de moda praia"}</p>
                </div>
            </footer>
        </div>
        <CartSidebar />
    </>
    }
}
