pub mod core;

#[cfg(target_arch = "wasm32")]
mod canvas;
#[cfg(target_arch = "wasm32")]
mod constants;
#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod events;
#[cfg(target_arch = "wasm32")]
mod folds;
#[cfg(target_arch = "wasm32")]
mod frame;
#[cfg(target_arch = "wasm32")]
mod guard;
#[cfg(target_arch = "wasm32")]
mod nav;
#[cfg(target_arch = "wasm32")]
mod observe;
#[cfg(target_arch = "wasm32")]
mod page;
#[cfg(target_arch = "wasm32")]
mod scroll;

#[cfg(target_arch = "wasm32")]
pub use web::*;

// Browser entry points. The pure logic in `core` builds and tests on the host;
// everything below needs a DOM.
#[cfg(target_arch = "wasm32")]
mod web {
    use crate::{dom, page};
    use wasm_bindgen::prelude::*;
    use wasm_bindgen_futures::spawn_local;

    #[wasm_bindgen(start)]
    pub fn start() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).ok();
        log::info!("quasar-web starting");

        spawn_local(async move {
            if let Err(e) = init().await {
                log::error!("init error: {:?}", e);
            }
        });
        Ok(())
    }

    async fn init() -> anyhow::Result<()> {
        let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
        page::with_page(|p| p.mount_all(&document));
        Ok(())
    }

    /// Mount every fold that is not mounted yet. Returns how many were mounted.
    #[wasm_bindgen]
    pub fn mount_page() -> usize {
        match dom::window_document() {
            Some(document) => page::with_page(|p| p.mount_all(&document)),
            None => 0,
        }
    }

    /// Tear down every fold and the navigation.
    #[wasm_bindgen]
    pub fn unmount_page() {
        page::with_page(|p| p.unmount_all());
    }

    #[wasm_bindgen]
    pub fn unmount_fold(id: &str) -> bool {
        page::with_page(|p| p.unmount_fold(id))
    }

    /// Tear down and mount again, reseeding the fold's decorative visuals.
    #[wasm_bindgen]
    pub fn remount_fold(id: &str) -> bool {
        let Some(document) = dom::window_document() else {
            return false;
        };
        page::with_page(|p| {
            p.unmount_fold(id);
            p.mount_fold(&document, id)
        })
    }
}
