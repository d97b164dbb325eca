use std::cell::RefCell;
use std::rc::{Rc, Weak};

use allinone_core::{Timers, effect};
use allinone_navigation::{EntryScope, NavHost};
use allinone_services::{
    GroceryCart, LocationDraft, LoginForm, PORTER_SERVICES, RIDE_SERVICES, RegisterForm,
    RideOption, RideSelection, ServiceKind, SubService, sub_service, suggestion,
};

use crate::transitions::{self, Action, Guard, GuardFacts, NavOp};
use crate::{FlowConfig, FlowError, Screen};

const CART_SLOT: &str = "grocery:cart";
const RIDE_SLOT: &str = "ride-confirmation:selection";
const LOCATION_SLOT: &str = "location-select:draft";
const LOGIN_SLOT: &str = "login:form";
const REGISTER_SLOT: &str = "register:form";

/// Result of a dispatched action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Moved { from: Screen, to: Screen },
    /// A guard held the transition back; nothing changed.
    Blocked(Guard),
    /// Back on the root entry.
    Stayed,
}

/// Drives a [`NavHost`] through the transition table.
///
/// Screen-local state (cart, ride selection, location draft, forms) is kept
/// in the saved state of the screen's navigation entry, so it appears when
/// the screen is pushed and is dropped when the screen leaves the stack.
pub struct Flow<N: NavHost<Screen> + 'static> {
    inner: Rc<FlowInner<N>>,
}

struct FlowInner<N: NavHost<Screen>> {
    host: N,
    timers: Timers,
    config: FlowConfig,
}

impl<N: NavHost<Screen> + 'static> Clone for Flow<N> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<N: NavHost<Screen> + 'static> Flow<N> {
    pub fn new(host: N, timers: Timers, config: FlowConfig) -> Self {
        Self {
            inner: Rc::new(FlowInner {
                host,
                timers,
                config,
            }),
        }
    }

    pub fn host(&self) -> &N {
        &self.inner.host
    }

    pub fn timers(&self) -> &Timers {
        &self.inner.timers
    }

    pub fn config(&self) -> &FlowConfig {
        &self.inner.config
    }

    /// Boot: the initial entry is replaced by the splash screen.
    pub fn start(&self) {
        log::info!(
            "flow start, splash for {:?}",
            self.inner.config.splash_delay
        );
        self.inner.host.replace(Screen::Splash);
        self.entered(Screen::Splash);
    }

    /// Dispose every screen. Pending timers bound to them are cancelled.
    pub fn teardown(&self) {
        log::info!("flow teardown");
        self.inner.host.teardown();
    }

    pub fn current(&self) -> Option<Screen> {
        self.inner.host.current()
    }

    /// Apply a user action. The splash transition only happens on its timer,
    /// so `SplashElapsed` is refused here.
    pub fn dispatch(&self, action: Action) -> Result<Outcome, FlowError> {
        if action == Action::SplashElapsed {
            let screen = self.current().ok_or(FlowError::NotStarted)?;
            log::warn!("{action} is timer-driven, rejected on {screen}");
            return Err(FlowError::NotAllowed { screen, action });
        }
        self.dispatch_inner(action)
    }

    fn dispatch_inner(&self, action: Action) -> Result<Outcome, FlowError> {
        let from = self.current().ok_or(FlowError::NotStarted)?;

        if action == Action::Back {
            return Ok(self.back_from(from));
        }

        let Some(rule) = transitions::lookup(from, action) else {
            log::warn!("{action} rejected on {from}");
            return Err(FlowError::NotAllowed {
                screen: from,
                action,
            });
        };

        if !rule.guard.allows(&self.guard_facts(from)) {
            log::warn!("{action} on {from} blocked by {:?}", rule.guard);
            return Ok(Outcome::Blocked(rule.guard));
        }

        match rule.op {
            NavOp::Push => self.inner.host.go_to(rule.to),
            NavOp::Replace => self.inner.host.replace(rule.to),
        }
        log::debug!("{from} --{action}--> {}", rule.to);
        self.entered(rule.to);
        Ok(Outcome::Moved { from, to: rule.to })
    }

    pub fn back(&self) -> Result<Outcome, FlowError> {
        self.dispatch(Action::Back)
    }

    fn back_from(&self, from: Screen) -> Outcome {
        if !self.inner.host.go_back() {
            return Outcome::Stayed;
        }
        match self.current() {
            Some(to) => {
                log::debug!("{from} --Back--> {to}");
                Outcome::Moved { from, to }
            }
            None => Outcome::Stayed,
        }
    }

    fn entered(&self, screen: Screen) {
        if screen == Screen::Splash {
            self.arm_splash_timer();
        }
    }

    fn arm_splash_timer(&self) {
        let Some(entry) = self.inner.host.top_entry() else {
            return;
        };
        let weak: Weak<FlowInner<N>> = Rc::downgrade(&self.inner);
        let timers = self.inner.timers.clone();
        let delay = self.inner.config.splash_delay;

        // bound to the splash entry: popping or replacing it cancels the task
        entry.scope().run(|| {
            effect(move || {
                timers
                    .schedule(delay, move || {
                        if let Some(inner) = weak.upgrade() {
                            Flow { inner }.splash_elapsed();
                        }
                    })
                    .into_dispose()
            })
        });
    }

    fn splash_elapsed(&self) {
        if self.current() != Some(Screen::Splash) {
            return;
        }
        if let Err(e) = self.dispatch_inner(Action::SplashElapsed) {
            log::warn!("splash transition failed: {e}");
        }
    }

    fn guard_facts(&self, screen: Screen) -> GuardFacts {
        let mut facts = GuardFacts::default();
        match screen {
            Screen::RideConfirmation => {
                if let Ok(sel) = self.ride_selection() {
                    facts.ride_selected = sel.borrow().can_confirm();
                }
            }
            Screen::Grocery => {
                if let Ok(cart) = self.cart() {
                    facts.cart_items = cart.total_items();
                }
            }
            _ => {}
        }
        facts
    }

    fn entry_on(&self, expected: Screen) -> Result<EntryScope<Screen>, FlowError> {
        let entry = self.inner.host.top_entry().ok_or(FlowError::NotStarted)?;
        if *entry.key() != expected {
            return Err(FlowError::WrongScreen {
                expected,
                actual: *entry.key(),
            });
        }
        Ok(entry)
    }

    // Screen-local state

    pub fn cart(&self) -> Result<GroceryCart, FlowError> {
        let entry = self.entry_on(Screen::Grocery)?;
        Ok(entry.saved().remember_handle(CART_SLOT, GroceryCart::default))
    }

    pub fn ride_selection(&self) -> Result<Rc<RefCell<RideSelection>>, FlowError> {
        let entry = self.entry_on(Screen::RideConfirmation)?;
        Ok(entry.remember_saveable(RIDE_SLOT, RideSelection::default))
    }

    pub fn location(&self) -> Result<Rc<RefCell<LocationDraft>>, FlowError> {
        let entry = self.entry_on(Screen::LocationSelect)?;
        Ok(entry.remember_saveable(LOCATION_SLOT, LocationDraft::default))
    }

    pub fn login_form(&self) -> Result<Rc<RefCell<LoginForm>>, FlowError> {
        let entry = self.entry_on(Screen::Login)?;
        Ok(entry.remember_saveable(LOGIN_SLOT, LoginForm::default))
    }

    pub fn register_form(&self) -> Result<Rc<RefCell<RegisterForm>>, FlowError> {
        let entry = self.entry_on(Screen::Register)?;
        Ok(entry.remember_saveable(REGISTER_SLOT, RegisterForm::default))
    }

    // Screen operations carrying data

    pub fn add_item(&self, id: &str) -> Result<u32, FlowError> {
        let cart = self.cart()?;
        let item = cart.catalog().require(id)?;
        cart.add_item(item);
        Ok(cart.quantity(item))
    }

    pub fn remove_item(&self, id: &str) -> Result<u32, FlowError> {
        let cart = self.cart()?;
        let item = cart.catalog().require(id)?;
        cart.remove_item(item);
        Ok(cart.quantity(item))
    }

    pub fn open_service(&self, kind: ServiceKind) -> Result<Outcome, FlowError> {
        self.dispatch(Action::OpenService(kind))
    }

    /// Tap a tile on the ride or porter screen.
    pub fn pick_sub_service(&self, id: &str) -> Result<Outcome, FlowError> {
        let screen = self.current().ok_or(FlowError::NotStarted)?;
        let tiles: &'static [SubService] = match screen {
            Screen::Ride => RIDE_SERVICES,
            Screen::Porter => PORTER_SERVICES,
            _ => {
                return Err(FlowError::NotAllowed {
                    screen,
                    action: Action::PickSubService,
                });
            }
        };
        let tile = sub_service(tiles, id)?;
        log::debug!("picked {} on {screen}", tile.name);
        self.dispatch(Action::PickSubService)
    }

    /// Fill the destination from a suggestion and move on to confirmation.
    pub fn pick_destination(&self, suggestion_id: &str) -> Result<Outcome, FlowError> {
        let picked = suggestion(suggestion_id)?;
        self.location()?.borrow_mut().pick(picked);
        self.dispatch(Action::PickDestination)
    }

    pub fn select_ride(&self, option_id: &str) -> Result<&'static RideOption, FlowError> {
        let selection = self.ride_selection()?;
        let option = selection.borrow_mut().select(option_id)?;
        Ok(option)
    }

    pub fn confirm_ride(&self) -> Result<Outcome, FlowError> {
        self.dispatch(Action::ConfirmRide)
    }

    pub fn view_cart(&self) -> Result<Outcome, FlowError> {
        self.dispatch(Action::ViewCart)
    }
}
