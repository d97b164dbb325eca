#[cfg(test)]
mod tests {
    use crate::*;
    use serde::{Deserialize, Serialize};
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    enum Route {
        Home,
        Detail(u32),
        Settings,
    }

    fn cleanup_flag(entry: &EntryScope<Route>) -> Rc<RefCell<bool>> {
        let flag = Rc::new(RefCell::new(false));
        let f = flag.clone();
        entry.scope().add_disposer(move || *f.borrow_mut() = true);
        flag
    }

    #[test]
    fn test_push_pop() {
        let nav = Navigator::new(Route::Home);
        nav.push(Route::Detail(1));
        nav.push(Route::Detail(2));
        assert_eq!(
            nav.stack.keys(),
            vec![Route::Home, Route::Detail(1), Route::Detail(2)]
        );

        assert!(nav.pop());
        assert_eq!(nav.current(), Some(Route::Detail(1)));
    }

    #[test]
    fn test_pop_keeps_root() {
        let nav = Navigator::new(Route::Home);
        assert!(!nav.pop());
        assert_eq!(nav.stack.size(), 1);
        assert_eq!(nav.current(), Some(Route::Home));
    }

    #[test]
    fn test_pop_disposes_entry_scope() {
        let nav = Navigator::new(Route::Home);
        nav.push(Route::Settings);
        let top = nav.stack.top().unwrap();
        let cleaned = cleanup_flag(&top);

        assert!(!*cleaned.borrow());
        nav.pop();
        assert!(*cleaned.borrow());
        assert!(top.scope().is_disposed());
    }

    #[test]
    fn test_replace_disposes_and_renews_entry() {
        let nav = Navigator::new(Route::Home);
        let first = nav.stack.top().unwrap();
        let cleaned = cleanup_flag(&first);
        first.remember_saveable("draft", || 5);

        nav.replace(Route::Settings);
        let second = nav.stack.top().unwrap();

        assert!(*cleaned.borrow());
        assert_ne!(first.id(), second.id());
        assert_eq!(second.key(), &Route::Settings);
        assert!(!second.saved().contains("draft"));
        assert_eq!(nav.stack.size(), 1);
        // nothing to go back to
        assert!(!nav.pop());
    }

    #[test]
    fn test_saved_state_lives_with_entry() {
        let nav = Navigator::new(Route::Home);
        nav.push(Route::Detail(7));
        let entry = nav.stack.top().unwrap();
        let counter = entry.remember_saveable("count", || 0);
        *counter.borrow_mut() += 3;

        let again = nav.stack.top().unwrap().remember_saveable("count", || 100);
        assert_eq!(*again.borrow(), 3);

        nav.pop();
        nav.push(Route::Detail(7));
        let fresh = nav.stack.top().unwrap().remember_saveable("count", || 0);
        assert_eq!(*fresh.borrow(), 0);
    }

    #[test]
    fn test_saved_state_type_change_replaces_slot() {
        let saved = SavedState::default();
        let a = saved.remember("slot", || 1u32);
        *a.borrow_mut() = 9;
        let b = saved.remember("slot", || String::from("x"));
        assert_eq!(*b.borrow(), "x");
    }

    #[test]
    fn test_remember_handle_shares_clone() {
        let saved = SavedState::default();
        let a = saved.remember_handle("sig", || allinone_core::signal(1));
        a.set(4);
        let b = saved.remember_handle("sig", || allinone_core::signal(0));
        assert_eq!(b.get(), 4);
    }

    #[test]
    fn test_teardown_disposes_everything() {
        let nav = Navigator::new(Route::Home);
        let home = cleanup_flag(&nav.stack.top().unwrap());
        nav.push(Route::Settings);
        let settings = cleanup_flag(&nav.stack.top().unwrap());

        nav.teardown();
        assert!(*home.borrow());
        assert!(*settings.borrow());
        assert!(nav.stack.is_empty());
        assert_eq!(nav.current(), None);
    }

    #[test]
    fn test_version_bumps_on_change() {
        let nav = Navigator::new(Route::Home);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let s = seen.clone();
        nav.stack.on_change(move |v| s.borrow_mut().push(v));

        nav.push(Route::Settings);
        nav.pop();
        // refused pop does not bump
        nav.pop();
        assert_eq!(*seen.borrow(), vec![1, 2]);
        assert_eq!(nav.stack.version(), 2);
    }

    #[test]
    fn test_json_snapshot() {
        let nav = Navigator::new(Route::Home);
        nav.push(Route::Detail(3));
        let json = nav.stack.to_json().unwrap();
        assert_eq!(json, r#"["Home",{"Detail":3}]"#);

        let other = Navigator::new(Route::Settings);
        let old = cleanup_flag(&other.stack.top().unwrap());
        other.stack.from_json(&json).unwrap();
        assert!(*old.borrow());
        assert_eq!(other.stack.keys(), vec![Route::Home, Route::Detail(3)]);
    }

    #[test]
    fn test_bad_snapshot_leaves_stack() {
        let nav = Navigator::new(Route::Home);
        nav.push(Route::Settings);
        assert!(matches!(
            nav.stack.from_json("not json"),
            Err(NavError::Snapshot(_))
        ));
        assert!(matches!(nav.stack.from_json("[]"), Err(NavError::EmptySnapshot)));
        assert_eq!(nav.stack.keys(), vec![Route::Home, Route::Settings]);
    }

    #[test]
    fn test_back_handler() {
        let nav = Navigator::new(Route::Home);
        nav.push(Route::Settings);
        let guard = install_back_handler(nav.clone());

        assert!(back::handle());
        assert_eq!(nav.current(), Some(Route::Home));
        assert!(!back::handle());

        guard.run();
        nav.push(Route::Settings);
        assert!(!back::handle());
        assert_eq!(nav.current(), Some(Route::Settings));
    }

    #[test]
    fn test_rc_host_delegates() {
        let nav = Rc::new(Navigator::new(Route::Home));
        let host: &dyn NavHost<Route> = &nav;
        host.go_to(Route::Settings);
        assert_eq!(host.current(), Some(Route::Settings));
        assert!(host.go_back());
        host.replace(Route::Detail(4));
        assert_eq!(nav.stack.keys(), vec![Route::Detail(4)]);
    }
}
