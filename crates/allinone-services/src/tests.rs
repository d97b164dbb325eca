#[cfg(test)]
mod tests {
    use crate::*;
    use allinone_core::StateHolder;
    use proptest::prelude::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn item(id: &str) -> &'static CatalogItem {
        Catalog::grocery().get(id).unwrap()
    }

    fn apples() -> &'static CatalogItem {
        item("1")
    }

    fn bananas() -> &'static CatalogItem {
        item("2")
    }

    #[test]
    fn test_apples_scenario() {
        let cart = GroceryCart::default();
        assert_eq!(apples().unit_price, Rupees(180));

        cart.add_item(apples());
        assert_eq!(cart.total_items(), 1);
        assert_eq!(cart.total_amount(), Rupees(180));

        cart.add_item(apples());
        assert_eq!(cart.total_items(), 2);
        assert_eq!(cart.total_amount(), Rupees(360));

        cart.remove_item(apples());
        assert_eq!(cart.total_items(), 1);
        assert_eq!(cart.total_amount(), Rupees(180));

        cart.remove_item(apples());
        assert!(cart.state().is_empty());
        assert_eq!(cart.total_items(), 0);
        assert_eq!(cart.total_amount(), Rupees(0));
    }

    #[test]
    fn test_mixed_items_total() {
        let cart = GroceryCart::default();
        cart.add_item(apples());
        cart.add_item(bananas());
        assert_eq!(cart.total_amount(), Rupees(240));
        assert_eq!(cart.quantity(apples()), 1);
        assert_eq!(cart.quantity(item("3")), 0);
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut state = CartState::new();
        state.remove("1");
        assert_eq!(state, CartState::new());

        state.add("2");
        let before = state.clone();
        state.remove("1");
        state.remove("no-such-item");
        assert_eq!(state, before);
    }

    #[test]
    fn test_add_saturates_at_max_quantity() {
        let mut state: CartState = [("1", u32::MAX), ("2", 0)].into_iter().collect();
        assert_eq!(state.quantity("2"), 0);
        assert_eq!(state.lines().count(), 1);

        state.add("1");
        assert_eq!(state.quantity("1"), u32::MAX);
        state.remove("1");
        assert_eq!(state.quantity("1"), u32::MAX - 1);
    }

    #[test]
    fn test_derived_values_are_stable() {
        let cart = GroceryCart::default();
        cart.add_item(item("4"));
        cart.add_item(item("5"));
        cart.add_item(item("5"));
        assert_eq!(cart.total_items(), cart.total_items());
        assert_eq!(cart.total_amount(), cart.total_amount());
        assert_eq!(cart.total_amount(), Rupees(240));
    }

    #[test]
    fn test_unknown_ids_do_not_price() {
        let mut state = CartState::new();
        state.add("missing");
        state.add("3");
        assert_eq!(state.total_items(), 2);
        assert_eq!(state.total_amount(&Catalog::grocery()), Rupees(40));
    }

    #[test]
    fn test_summary_and_observers() {
        let cart = GroceryCart::default();
        assert_eq!(cart.summary(), None);

        let seen = Rc::new(RefCell::new(Vec::new()));
        let s = seen.clone();
        let sub = cart.on_change(move |summary| s.borrow_mut().push(summary.map(|x| x.to_string())));

        cart.add_item(apples());
        cart.add_item(bananas());
        cart.remove_item(apples());
        cart.remove_item(bananas());

        assert_eq!(
            *seen.borrow(),
            vec![
                Some("1 item · ₹180".to_string()),
                Some("2 items · ₹240".to_string()),
                Some("1 item · ₹60".to_string()),
                None,
            ]
        );

        assert!(cart.unsubscribe(sub));
        cart.add_item(apples());
        assert_eq!(seen.borrow().len(), 4);
        assert_eq!(cart.summary().unwrap().items_label(), "1 item");
    }

    #[test]
    fn test_catalog_lookup() {
        let catalog = Catalog::grocery();
        assert_eq!(catalog.items().len(), 5);
        assert_eq!(catalog.require("4").unwrap().name, "Bell Peppers");
        assert_eq!(
            catalog.require("9"),
            Err(ServiceError::UnknownItem("9".to_string()))
        );
        assert_eq!(bananas().price_label(), "₹60/dozen");
    }

    #[test]
    fn test_ride_selection() {
        let mut selection = RideSelection::default();
        assert!(!selection.can_confirm());

        assert!(selection.select("helicopter").is_err());
        assert!(!selection.can_confirm());

        let auto = selection.select("auto").unwrap();
        assert_eq!(auto.fare, Rupees(100));
        assert_eq!(auto.eta_minutes, 20);
        assert!(selection.can_confirm());

        selection.select("sedan").unwrap();
        assert!(selection.is_selected("sedan"));
        assert!(!selection.is_selected("auto"));

        assert!(selection.select("nope").is_err());
        assert!(selection.is_selected("sedan"));
    }

    #[test]
    fn test_location_draft() {
        let mut draft = LocationDraft::default();
        assert_eq!(draft.origin(), CURRENT_LOCATION);
        assert_eq!(draft.destination(), "");

        draft.set_destination("Somewhere");
        assert_eq!(draft.destination(), "Somewhere");

        draft.pick(suggestion("4").unwrap());
        assert_eq!(draft.destination(), "Metro Station");
        assert!(suggestion("42").is_err());
    }

    #[test]
    fn test_service_kinds() {
        assert_eq!(ServiceKind::from_id("porter"), Some(ServiceKind::Porter));
        assert_eq!(ServiceKind::from_id("food"), None);
        assert_eq!(ServiceKind::Grocery.subtitle(), "Fresh groceries delivered");
        assert_eq!(
            serde_json::to_string(&ServiceKind::Ride).unwrap(),
            "\"ride\""
        );
        assert_eq!(sub_service(PORTER_SERVICES, "parcel").unwrap().name, "All India Parcel");
        assert_eq!(
            sub_service(RIDE_SERVICES, "parcel"),
            Err(ServiceError::UnknownSubService("parcel".to_string()))
        );
    }

    #[test]
    fn test_rupees() {
        assert_eq!(Rupees(180) * 3, Rupees(540));
        assert_eq!([Rupees(1), Rupees(2)].into_iter().sum::<Rupees>(), Rupees(3));
        assert_eq!(Rupees(250).to_string(), "₹250");
        assert_eq!(serde_json::to_string(&Rupees(60)).unwrap(), "60");
    }

    #[test]
    fn test_forms_hide_passwords() {
        let form = LoginForm {
            email: "a@b.c".into(),
            password: "hunter2".into(),
        };
        let shown = format!("{form:?}");
        assert!(shown.contains("a@b.c"));
        assert!(!shown.contains("hunter2"));

        let reg = RegisterForm {
            password: "pw1".into(),
            confirm_password: "pw1".into(),
            ..Default::default()
        };
        assert!(!format!("{reg:?}").contains("pw1"));
    }

    const IDS: [&str; 6] = ["1", "2", "3", "4", "5", "missing"];

    fn cart_event() -> impl Strategy<Value = CartEvent> {
        (any::<bool>(), prop::sample::select(IDS.to_vec())).prop_map(|(add, id)| {
            if add {
                CartEvent::Add(id.to_string())
            } else {
                CartEvent::Remove(id.to_string())
            }
        })
    }

    fn cart_state() -> impl Strategy<Value = CartState> {
        prop::collection::vec(cart_event(), 0..64).prop_map(|events| {
            events
                .into_iter()
                .fold(CartState::new(), |s, e| CartReducer::reduce(&s, e))
        })
    }

    proptest! {
        #[test]
        fn prop_event_sequences_keep_quantities_positive(events in prop::collection::vec(cart_event(), 0..256)) {
            let mut state = CartState::new();
            let mut expected = [0u32; IDS.len()];

            for event in events {
                match &event {
                    CartEvent::Add(id) => {
                        let slot = IDS.iter().position(|i| *i == id.as_str()).unwrap();
                        expected[slot] += 1;
                    }
                    CartEvent::Remove(id) => {
                        let slot = IDS.iter().position(|i| *i == id.as_str()).unwrap();
                        expected[slot] = expected[slot].saturating_sub(1);
                    }
                }
                state = CartReducer::reduce(&state, event);

                prop_assert!(state.lines().all(|(_, qty)| qty >= 1));
                prop_assert_eq!(state.total_items(), expected.iter().sum::<u32>());
                for (slot, id) in IDS.iter().enumerate() {
                    prop_assert_eq!(state.quantity(id), expected[slot]);
                }
            }
        }

        #[test]
        fn prop_add_then_remove_restores(state in cart_state(), id in prop::sample::select(IDS.to_vec())) {
            let before = state.clone();
            let mut after = state;
            after.add(id);
            after.remove(id);
            prop_assert_eq!(after, before);
        }

        #[test]
        fn prop_remove_absent_leaves_cart(state in cart_state(), id in prop::sample::select(IDS.to_vec())) {
            prop_assume!(state.quantity(id) == 0);
            let mut after = state.clone();
            after.remove(id);
            prop_assert_eq!(after, state);
        }
    }
}
