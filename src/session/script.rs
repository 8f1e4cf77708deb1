//! Line-oriented editing scripts.
//!
//! One command per line; blank lines and `#` comments are skipped:
//!
//! ```text
//! tool circle|diamond|arrow
//! action add|move|resize|clone|add+|clone+
//! press X Y | drag X Y | release X Y | click X Y
//! key C
//! slider r|g|b|a VALUE
//! export png|jpeg
//! roster
//! ```

use crate::draw::ShapeType;
use crate::export::ExportFormat;
use crate::input::{EditAction, Key};
use crate::ui::ColorChannel;
use anyhow::{Context, Result, anyhow, bail};
use std::str::FromStr;

/// A single parsed script command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptCommand {
    Tool(ShapeType),
    Action(EditAction),
    Press(i32, i32),
    Drag(i32, i32),
    Release(i32, i32),
    Click(i32, i32),
    Key(Key),
    Slider(ColorChannel, i32),
    Export(ExportFormat),
    Roster,
}

/// A command together with the 1-based line it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScriptLine {
    pub line: usize,
    pub command: ScriptCommand,
}

fn expect_args<'a>(verb: &str, args: &'a [&'a str], count: usize) -> Result<&'a [&'a str]> {
    if args.len() != count {
        bail!("'{verb}' takes {count} argument(s), got {}", args.len());
    }
    Ok(args)
}

fn parse_point(verb: &str, args: &[&str]) -> Result<(i32, i32)> {
    let args = expect_args(verb, args, 2)?;
    let x = args[0]
        .parse()
        .with_context(|| format!("invalid x coordinate '{}'", args[0]))?;
    let y = args[1]
        .parse()
        .with_context(|| format!("invalid y coordinate '{}'", args[1]))?;
    Ok((x, y))
}

impl FromStr for ScriptCommand {
    type Err = anyhow::Error;

    fn from_str(line: &str) -> Result<Self> {
        let words: Vec<&str> = line.split_whitespace().collect();
        let Some((&verb, args)) = words.split_first() else {
            bail!("empty command");
        };

        let command = match verb.to_lowercase().as_str() {
            "tool" => {
                let args = expect_args(verb, args, 1)?;
                ScriptCommand::Tool(args[0].parse().map_err(|e: String| anyhow!(e))?)
            }
            "action" => {
                let args = expect_args(verb, args, 1)?;
                ScriptCommand::Action(args[0].parse().map_err(|e: String| anyhow!(e))?)
            }
            "press" => {
                let (x, y) = parse_point(verb, args)?;
                ScriptCommand::Press(x, y)
            }
            "drag" => {
                let (x, y) = parse_point(verb, args)?;
                ScriptCommand::Drag(x, y)
            }
            "release" => {
                let (x, y) = parse_point(verb, args)?;
                ScriptCommand::Release(x, y)
            }
            "click" => {
                let (x, y) = parse_point(verb, args)?;
                ScriptCommand::Click(x, y)
            }
            "key" => {
                let args = expect_args(verb, args, 1)?;
                ScriptCommand::Key(Key::from_name(args[0]))
            }
            "slider" => {
                let args = expect_args(verb, args, 2)?;
                let mut letters = args[0].chars();
                let channel = match (letters.next(), letters.next()) {
                    (Some(c), None) => ColorChannel::from_char(c)?,
                    _ => bail!("invalid slider channel '{}'", args[0]),
                };
                let value = args[1]
                    .parse()
                    .with_context(|| format!("invalid slider value '{}'", args[1]))?;
                ScriptCommand::Slider(channel, value)
            }
            "export" => {
                let args = expect_args(verb, args, 1)?;
                ScriptCommand::Export(args[0].parse().map_err(|e: String| anyhow!(e))?)
            }
            "roster" => {
                expect_args(verb, args, 0)?;
                ScriptCommand::Roster
            }
            other => bail!("unknown command '{other}'"),
        };
        Ok(command)
    }
}

/// Parses a whole script, failing on the first bad line.
pub fn parse_script(text: &str) -> Result<Vec<ScriptLine>> {
    let mut commands = Vec::new();
    for (index, raw) in text.lines().enumerate() {
        let line = index + 1;
        let content = raw.split('#').next().unwrap_or_default().trim();
        if content.is_empty() {
            continue;
        }
        let command = content
            .parse()
            .with_context(|| format!("line {line}: cannot parse '{content}'"))?;
        commands.push(ScriptLine { line, command });
    }
    Ok(commands)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commands_parse() {
        assert_eq!(
            "tool Diamond".parse::<ScriptCommand>().unwrap(),
            ScriptCommand::Tool(ShapeType::Diamond)
        );
        assert_eq!(
            "action clone+".parse::<ScriptCommand>().unwrap(),
            ScriptCommand::Action(EditAction::ClonePlus)
        );
        assert_eq!(
            "drag -5 12".parse::<ScriptCommand>().unwrap(),
            ScriptCommand::Drag(-5, 12)
        );
        assert_eq!(
            "key r".parse::<ScriptCommand>().unwrap(),
            ScriptCommand::Key(Key::Char('r'))
        );
        assert_eq!(
            "slider a 300".parse::<ScriptCommand>().unwrap(),
            ScriptCommand::Slider(ColorChannel::Alpha, 300)
        );
        assert_eq!(
            "export jpeg".parse::<ScriptCommand>().unwrap(),
            ScriptCommand::Export(ExportFormat::Jpeg)
        );
    }

    #[test]
    fn bad_commands_are_rejected() {
        for line in [
            "paint 1 2",
            "click 1",
            "click one two",
            "tool hexagon",
            "slider x 10",
            "slider rg 10",
            "roster now",
        ] {
            assert!(line.parse::<ScriptCommand>().is_err(), "{line} parsed");
        }
    }

    #[test]
    fn script_skips_comments_and_reports_lines() {
        let script = "# setup\n\ntool arrow\nclick 10 10 # first arrow\n";
        let lines = parse_script(script).unwrap();
        assert_eq!(
            lines,
            vec![
                ScriptLine {
                    line: 3,
                    command: ScriptCommand::Tool(ShapeType::Arrow)
                },
                ScriptLine {
                    line: 4,
                    command: ScriptCommand::Click(10, 10)
                },
            ]
        );

        let err = parse_script("roster\nbogus\n").unwrap_err();
        assert!(format!("{err:#}").starts_with("line 2:"));
    }
}
