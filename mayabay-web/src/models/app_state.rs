use shared::cart::Cart;
use shared::catalog::CatalogView;
use shared::models::Product;
use shared::session::Session;
use yewdux::Store;

/// Application-wide state, owned by the yewdux store.
///
/// Rendering code reads it through `use_selector`; every mutation goes
/// through `Dispatch::reduce_mut`. All of it is page-lifetime only except
/// the session, which is rebuilt from the stored token on startup.
#[derive(Default, Clone, PartialEq, Store)]
pub struct AppState {
    /// Full catalog. `None` until the initial fetch succeeds, which keeps
    /// the grid in its connecting placeholder (no automatic retry).
    pub products: Option<Vec<Product>>,

    /// The displayed subset and its heading.
    pub view: CatalogView,

    /// The shopping cart. Not persisted; a reload empties it.
    pub cart: Cart,

    /// Current session, `None` when logged out.
    pub session: Option<Session>,

    /// Whether the cart sidebar is open.
    pub cart_open: bool,
}
