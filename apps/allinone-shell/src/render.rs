use std::io::{self, Write};

use allinone_flow::{Flow, Screen};
use allinone_navigation::Navigator;
use allinone_services::{PORTER_SERVICES, RIDE_OPTIONS, RIDE_SERVICES, SUGGESTIONS, ServiceKind};

pub type AppFlow = Flow<Navigator<Screen>>;

pub fn screen<W: Write>(flow: &AppFlow, out: &mut W) -> io::Result<()> {
    let Some(current) = flow.current() else {
        return writeln!(out, "(no screen)");
    };
    writeln!(out, "== {current}")?;

    match current {
        Screen::Splash => {
            writeln!(out, "AllInOne")?;
            writeln!(out, "Your Super App")?;
        }
        Screen::Login => {
            writeln!(out, "Welcome Back. Sign in to continue.")?;
            writeln!(out, "[signin] [guest]   Don't have an account? [signup]")?;
        }
        Screen::Register => {
            writeln!(out, "Create Account. Join AllInOne today.")?;
            writeln!(out, "[register]   Already have an account? [tologin]")?;
        }
        Screen::Services => {
            writeln!(out, "What service do you need today?")?;
            for kind in ServiceKind::ALL {
                writeln!(out, "  {:<8} {}", kind.id(), kind.subtitle())?;
            }
        }
        Screen::Ride => {
            writeln!(out, "[search] Where to go?")?;
            for tile in RIDE_SERVICES {
                writeln!(out, "  {:<8} {}", tile.id, tile.name)?;
            }
        }
        Screen::Porter => {
            writeln!(out, "Pick up from: Current Location [pickup]")?;
            for tile in PORTER_SERVICES {
                writeln!(
                    out,
                    "  {:<8} {} ({})",
                    tile.id,
                    tile.name,
                    tile.subtitle.unwrap_or_default()
                )?;
            }
        }
        Screen::Grocery => grocery(flow, out)?,
        Screen::LocationSelect => {
            if let Ok(draft) = flow.location() {
                let draft = draft.borrow();
                writeln!(out, "From: {}", draft.origin())?;
                writeln!(out, "To:   {}", draft.destination())?;
            }
            writeln!(out, "Suggestions:")?;
            for s in SUGGESTIONS {
                writeln!(out, "  {} {} - {}", s.id, s.name, s.address)?;
            }
        }
        Screen::RideConfirmation => {
            let selection = flow.ride_selection().ok();
            for option in RIDE_OPTIONS {
                let marker = match &selection {
                    Some(sel) if sel.borrow().is_selected(option.id) => '*',
                    _ => ' ',
                };
                writeln!(
                    out,
                    " {marker} {:<8} {:>3} mins  {}",
                    option.id, option.eta_minutes, option.fare
                )?;
            }
            let enabled = selection.as_ref().is_some_and(|s| s.borrow().can_confirm());
            writeln!(
                out,
                "[confirm]{}",
                if enabled { "" } else { " (select a ride first)" }
            )?;
        }
        Screen::RideConfirmed | Screen::Cart => {}
    }
    Ok(())
}

fn grocery<W: Write>(flow: &AppFlow, out: &mut W) -> io::Result<()> {
    let Ok(cart) = flow.cart() else {
        return Ok(());
    };
    for item in cart.catalog().items() {
        let qty = cart.quantity(item);
        let qty = if qty > 0 {
            format!("x{qty}")
        } else {
            String::new()
        };
        writeln!(
            out,
            "  {} {:<16} {:<10} {qty}",
            item.id,
            item.name,
            item.price_label()
        )?;
    }
    if let Some(summary) = cart.summary() {
        writeln!(out, "{summary}  [cart]")?;
    }
    Ok(())
}
