//! Line-to-command mapping for the host simulation.

/// One line of operator input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HostCommand {
    /// Open (or reopen) the initiative view.
    Open,
    Join { token: String, priority: String },
    Leave { token: String },
    /// Advance to the next turn.
    Next,
    /// Print the turn order.
    Order,
    /// Declare which character a token represents.
    Token {
        token: String,
        character: String,
        controlled: bool,
    },
    Select(Vec<String>),
    /// Speak as another player.
    As(String),
    /// Print a token's markers.
    Markers(String),
    /// A chat line, commands included.
    Chat(String),
    Help,
    Quit,
    /// Not understood; carries the reason.
    Invalid(String),
}

impl HostCommand {
    /// Parses a line. Blank lines yield `None`.
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }
        if line.starts_with('!') {
            return Some(Self::Chat(line.to_owned()));
        }

        let mut words = line.split_whitespace();
        let command = words.next()?;
        let args: Vec<&str> = words.collect();

        let parsed = match (command, args.as_slice()) {
            ("open", []) => Self::Open,
            ("join", [token]) => Self::Join {
                token: (*token).to_owned(),
                priority: "0".to_owned(),
            },
            ("join", [token, priority]) => Self::Join {
                token: (*token).to_owned(),
                priority: (*priority).to_owned(),
            },
            ("leave", [token]) => Self::Leave {
                token: (*token).to_owned(),
            },
            ("next", []) => Self::Next,
            ("order", []) => Self::Order,
            ("token", [token, character]) => Self::Token {
                token: (*token).to_owned(),
                character: (*character).to_owned(),
                controlled: false,
            },
            ("token", [token, character, "controlled"]) => Self::Token {
                token: (*token).to_owned(),
                character: (*character).to_owned(),
                controlled: true,
            },
            ("select", tokens) => Self::Select(tokens.iter().map(|t| (*t).to_owned()).collect()),
            ("as", [player]) => Self::As((*player).to_owned()),
            ("markers", [token]) => Self::Markers((*token).to_owned()),
            ("help", _) => Self::Help,
            ("quit" | "exit", _) => Self::Quit,
            ("join" | "leave" | "token" | "as" | "markers" | "open" | "next" | "order", _) => {
                Self::Invalid(format!("wrong arguments for {command}, try help"))
            }
            _ => Self::Invalid(format!("unknown command {command}, try help")),
        };
        Some(parsed)
    }
}

pub const HELP: &str = "\
open                               open initiative (clears the order, adds the round counter)
join <token> [priority]            add a token to the turn order
leave <token>                      remove a token from the turn order
next                               advance to the next turn
order                              show the turn order
token <id> <character> [controlled]  declare which character a token represents
select <token>...                  select tokens for !cc
as <player>                        speak as another player
markers <token>                    show a token's markers
!cc add|remove|clear|show ...      condition commands (GM only)
!cond [list|<condition>]           condition reference
quit                               leave";
