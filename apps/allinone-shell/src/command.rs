use allinone_flow::Action;
use anyhow::{Context, bail};
use allinone_services::ServiceKind;
use web_time::Duration;

pub const HELP: &str = "\
commands:
  wait [ms]          let time pass (default: until the next timer)
  signin | guest     leave the login screen
  signup | tologin   switch between login and register
  register           submit the registration form
  open <service>     ride, porter or grocery
  tile <id>          pick a ride/porter tile
  search | pickup    open location select from ride / porter
  to <text>          type a destination
  dest <id>          pick a suggested destination
  select <id>        choose a ride option
  confirm            confirm the ride
  add <id> | remove <id>
  cart               view cart
  back               go back
  stack              print the navigation stack
  help | quit";

#[derive(Debug, PartialEq)]
pub enum Command {
    Wait(Option<Duration>),
    Do(Action),
    Tile(String),
    TypeDestination(String),
    Destination(String),
    Select(String),
    Add(String),
    Remove(String),
    Back,
    Stack,
    Help,
    Quit,
}

impl Command {
    pub fn parse(line: &str) -> anyhow::Result<Command> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((w, r)) => (w, r.trim()),
            None => (line, ""),
        };
        let arg = |what: &str| -> anyhow::Result<String> {
            if rest.is_empty() {
                bail!("{word} needs {what}");
            }
            Ok(rest.to_string())
        };

        let cmd = match word {
            "wait" if rest.is_empty() => Command::Wait(None),
            "wait" => {
                let ms: u64 = rest
                    .parse()
                    .with_context(|| format!("'{rest}' is not a number of milliseconds"))?;
                Command::Wait(Some(Duration::from_millis(ms)))
            }
            "signin" | "login" => Command::Do(Action::SignIn),
            "guest" => Command::Do(Action::ContinueAsGuest),
            "signup" => Command::Do(Action::OpenRegister),
            "register" => Command::Do(Action::SubmitRegistration),
            "tologin" => Command::Do(Action::OpenLogin),
            "open" => {
                let id = arg("a service")?;
                match ServiceKind::from_id(&id) {
                    Some(kind) => Command::Do(Action::OpenService(kind)),
                    None => bail!("unknown service '{id}'"),
                }
            }
            "tile" => Command::Tile(arg("a tile id")?),
            "search" => Command::Do(Action::SearchDestination),
            "pickup" => Command::Do(Action::EditPickup),
            "to" => Command::TypeDestination(arg("some text")?),
            "dest" => Command::Destination(arg("a suggestion id")?),
            "select" => Command::Select(arg("a ride option id")?),
            "confirm" => Command::Do(Action::ConfirmRide),
            "add" => Command::Add(arg("an item id")?),
            "remove" => Command::Remove(arg("an item id")?),
            "cart" => Command::Do(Action::ViewCart),
            "back" => Command::Back,
            "stack" => Command::Stack,
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            "" => bail!("empty command"),
            other => bail!("unknown command '{other}', try 'help'"),
        };
        Ok(cmd)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!(Command::parse("wait").unwrap(), Command::Wait(None));
        assert_eq!(
            Command::parse(" wait 250 ").unwrap(),
            Command::Wait(Some(Duration::from_millis(250)))
        );
        assert_eq!(
            Command::parse("open grocery").unwrap(),
            Command::Do(Action::OpenService(ServiceKind::Grocery))
        );
        assert_eq!(
            Command::parse("to Old Town Square").unwrap(),
            Command::TypeDestination("Old Town Square".into())
        );
        assert_eq!(Command::parse("add 1").unwrap(), Command::Add("1".into()));
    }

    #[test]
    fn test_parse_errors() {
        assert!(Command::parse("").is_err());
        assert!(Command::parse("fly").is_err());
        assert!(Command::parse("open boats").is_err());
        assert!(Command::parse("add").is_err());
        assert!(Command::parse("wait soon").is_err());
    }
}
