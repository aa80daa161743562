use crate::constants::{FOLD_ATTR, FOLD_SELECTOR, NAV_SELECTOR};
use crate::dom;
use crate::folds::{self, MountedFold};
use crate::guard::Teardown;
use crate::nav::{self, NavHandle};
use fnv::FnvHashMap;
use std::cell::RefCell;
use web_sys as web;

thread_local! {
    static PAGE: RefCell<Page> = RefCell::new(Page::default());
}

/// Run `f` against the page registry.
pub fn with_page<T>(f: impl FnOnce(&mut Page) -> T) -> T {
    PAGE.with(|page| f(&mut page.borrow_mut()))
}

/// Every mounted fold, keyed by its `data-fold` id.
#[derive(Default)]
pub struct Page {
    folds: FnvHashMap<String, MountedFold>,
    nav: Option<NavHandle>,
}

fn fold_id(section: &web::Element, index: usize) -> String {
    section
        .get_attribute(FOLD_ATTR)
        .map(|id| id.trim().to_string())
        .filter(|id| !id.is_empty())
        .unwrap_or_else(|| format!("fold-{index}"))
}

fn fold_sections(document: &web::Document) -> Vec<(String, web::Element)> {
    let Some(root) = document.document_element() else {
        return Vec::new();
    };
    dom::query_all(&root, FOLD_SELECTOR)
        .into_iter()
        .enumerate()
        .map(|(i, section)| (fold_id(&section, i), section))
        .collect()
}

impl Page {
    pub fn is_mounted(&self, id: &str) -> bool {
        self.folds.contains_key(id)
    }

    /// Mount the navigation and every fold not already mounted. Returns the
    /// number of folds mounted by this call.
    pub fn mount_all(&mut self, document: &web::Document) -> usize {
        if self.nav.is_none() {
            if let Some(root) = document.document_element() {
                self.nav = dom::query_all(&root, NAV_SELECTOR)
                    .first()
                    .map(nav::mount_nav);
            }
        }
        let mut mounted = 0;
        for (id, section) in fold_sections(document) {
            if self.is_mounted(&id) {
                log::warn!("[page] fold id `{id}` already mounted, skipping");
                continue;
            }
            let fold = folds::mount_fold(&section, id.clone());
            self.folds.insert(id, fold);
            mounted += 1;
        }
        log::info!("[page] mounted {} folds ({} total)", mounted, self.folds.len());
        mounted
    }

    /// Mount the fold with `id`, if present in the document and not mounted.
    pub fn mount_fold(&mut self, document: &web::Document, id: &str) -> bool {
        if self.is_mounted(id) {
            return false;
        }
        let Some((id, section)) = fold_sections(document)
            .into_iter()
            .find(|(candidate, _)| candidate == id)
        else {
            log::warn!("[page] no fold with id `{id}`");
            return false;
        };
        let fold = folds::mount_fold(&section, id.clone());
        self.folds.insert(id, fold);
        true
    }

    pub fn unmount_fold(&mut self, id: &str) -> bool {
        match self.folds.remove(id) {
            Some(mut fold) => {
                fold.teardown();
                true
            }
            None => false,
        }
    }

    pub fn unmount_all(&mut self) {
        for (_, mut fold) in self.folds.drain() {
            fold.teardown();
        }
        if let Some(mut nav) = self.nav.take() {
            nav.teardown();
        }
        log::info!("[page] unmounted");
    }
}
