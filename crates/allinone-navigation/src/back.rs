//! Back-dispatcher
//!
//! platform calls handle(); the app installs a handler for the displayed stack.
use std::{cell::RefCell, rc::Rc};

use allinone_core::{Dispose, on_unmount};

use crate::{NavKey, Navigator};

type Handler = Rc<dyn Fn() -> bool>;

thread_local! {
    static H: RefCell<Option<Handler>> = const { RefCell::new(None) };
}

pub fn set(handler: Option<Handler>) {
    H.with(|h| *h.borrow_mut() = handler);
}

/// Returns `true` if the back press was consumed.
pub fn handle() -> bool {
    // clone out so the handler may reinstall itself
    let handler = H.with(|h| h.borrow().clone());
    match handler {
        Some(handler) => handler(),
        None => false,
    }
}

/// Install the global back handler for `nav`; the returned guard uninstalls it.
pub fn install_back_handler<K: NavKey>(nav: Navigator<K>) -> Dispose {
    set(Some(Rc::new(move || nav.pop())));
    on_unmount(|| set(None))
}
