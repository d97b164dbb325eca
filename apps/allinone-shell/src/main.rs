use std::io::{self, BufRead, Write};

use allinone_core::Timers;
use allinone_flow::{Flow, FlowConfig, Screen};
use allinone_navigation::{Navigator, back, install_back_handler};
use anyhow::Context;

mod command;
mod idle;
mod render;

use command::{Command, HELP};
use render::AppFlow;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = FlowConfig::from_env()?;
    let nav = Navigator::new(Screen::Splash);
    let back_handler = install_back_handler(nav.clone());
    let flow = Flow::new(nav, Timers::system(), config);
    flow.start();

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut out = io::stdout().lock();
    render::screen(&flow, &mut out)?;

    loop {
        out.flush()?;
        // the splash screen moves on by itself
        if idle::run_pending(flow.timers(), std::thread::sleep) > 0 {
            render::screen(&flow, &mut out)?;
            out.flush()?;
        }

        let Some(line) = lines.next() else {
            break;
        };
        let line = line.context("failed to read command")?;

        match Command::parse(&line) {
            Ok(Command::Quit) => break,
            Ok(Command::Help) => writeln!(out, "{HELP}")?,
            Ok(cmd) => {
                if let Err(e) = apply(&flow, cmd, &mut out) {
                    writeln!(out, "! {e:#}")?;
                }
            }
            Err(e) => writeln!(out, "! {e:#}")?,
        }

        flow.timers().run_due();
        render::screen(&flow, &mut out)?;
    }

    back_handler.run();
    flow.teardown();
    Ok(())
}

fn apply<W: Write>(flow: &AppFlow, cmd: Command, out: &mut W) -> anyhow::Result<()> {
    match cmd {
        Command::Wait(by) => {
            let by = by
                .or_else(|| flow.timers().time_until_next())
                .unwrap_or_default();
            log::debug!("waiting {by:?}");
            std::thread::sleep(by);
        }
        Command::Do(action) => report(out, flow.dispatch(action)?)?,
        Command::Tile(id) => report(out, flow.pick_sub_service(&id)?)?,
        Command::TypeDestination(text) => flow.location()?.borrow_mut().set_destination(text),
        Command::Destination(id) => report(out, flow.pick_destination(&id)?)?,
        Command::Select(id) => {
            let option = flow.select_ride(&id)?;
            writeln!(out, "selected {} ({})", option.name, option.fare)?;
        }
        Command::Add(id) => {
            flow.add_item(&id)?;
        }
        Command::Remove(id) => {
            flow.remove_item(&id)?;
        }
        Command::Back => {
            if !back::handle() {
                writeln!(out, "nothing to go back to")?;
            }
        }
        Command::Stack => writeln!(out, "{}", flow.host().stack.to_json()?)?,
        Command::Help | Command::Quit => {}
    }
    Ok(())
}

fn report<W: Write>(out: &mut W, outcome: allinone_flow::Outcome) -> io::Result<()> {
    if let allinone_flow::Outcome::Blocked(guard) = outcome {
        writeln!(out, "not yet: {guard:?}")?;
    }
    Ok(())
}
