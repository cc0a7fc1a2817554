use anyhow::{Context, Result};
use deathchest_core::{BlockPos, ItemStack, RegistryKey, SimTick};
use deathchest_world::BlockKind;
use serde::Deserialize;
use std::{collections::VecDeque, fs, path::Path};

#[derive(Debug, Deserialize)]
struct CommandScriptFile {
    steps: Vec<CommandScriptStepDef>,
}

#[derive(Debug, Clone, Deserialize)]
struct CommandScriptStepDef {
    tick: u64,
    command: String,
}

#[derive(Debug, Clone)]
struct CommandScriptStep {
    tick: SimTick,
    command: HostCommand,
}

/// One scripted action against the headless host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostCommand {
    /// `die <name> <x> <y> <z> [item*count]...`
    Die {
        name: String,
        pos: BlockPos,
        items: Vec<ItemStack>,
    },
    /// `open <x> <y> <z>`
    Open(BlockPos),
    /// `close <x> <y> <z>`
    Close(BlockPos),
    /// `take <x> <y> <z> <slot|all>`; `None` takes every slot.
    Take { pos: BlockPos, slot: Option<usize> },
    /// `put <x> <y> <z> <item*count>`
    Put { pos: BlockPos, item: ItemStack },
    /// `set <x> <y> <z> <kind>`
    Set { pos: BlockPos, kind: BlockKind },
}

impl HostCommand {
    /// Parse a single command line.
    pub fn parse(line: &str) -> Result<Self> {
        let mut words = line.split_whitespace();
        let verb = words.next().context("empty command")?;
        let command = match verb {
            "die" => {
                let name = words.next().context("die requires a player name")?.to_string();
                let pos = parse_pos(&mut words)?;
                let items = words.by_ref().map(parse_stack).collect::<Result<Vec<_>>>()?;
                HostCommand::Die { name, pos, items }
            }
            "open" => HostCommand::Open(parse_pos(&mut words)?),
            "close" => HostCommand::Close(parse_pos(&mut words)?),
            "take" => {
                let pos = parse_pos(&mut words)?;
                let slot = match words.next().context("take requires a slot or 'all'")? {
                    "all" => None,
                    raw => Some(
                        raw.parse::<usize>()
                            .with_context(|| format!("invalid slot '{raw}'"))?,
                    ),
                };
                HostCommand::Take { pos, slot }
            }
            "put" => {
                let pos = parse_pos(&mut words)?;
                let item = parse_stack(words.next().context("put requires an item")?)?;
                HostCommand::Put { pos, item }
            }
            "set" => {
                let pos = parse_pos(&mut words)?;
                let raw = words.next().context("set requires a block kind")?;
                let kind = BlockKind::from_name(raw)
                    .with_context(|| format!("unknown block kind '{raw}'"))?;
                HostCommand::Set { pos, kind }
            }
            other => anyhow::bail!("unknown command '{other}'"),
        };
        if let Some(extra) = words.next() {
            anyhow::bail!("unexpected argument '{extra}' in '{line}'");
        }
        Ok(command)
    }
}

fn parse_pos<'a, I: Iterator<Item = &'a str>>(words: &mut I) -> Result<BlockPos> {
    let mut coord = |axis: &str| -> Result<i32> {
        let raw = words
            .next()
            .with_context(|| format!("missing {axis} coordinate"))?;
        raw.parse::<i32>()
            .with_context(|| format!("invalid {axis} coordinate '{raw}'"))
    };
    let x = coord("x")?;
    let y = coord("y")?;
    let z = coord("z")?;
    Ok(BlockPos::new(x, y, z))
}

/// `name*count` or bare `name` (count 1).
fn parse_stack(raw: &str) -> Result<ItemStack> {
    let (name, count) = match raw.split_once('*') {
        Some((name, count)) => (
            name,
            count
                .parse::<u32>()
                .with_context(|| format!("invalid stack count in '{raw}'"))?,
        ),
        None => (raw, 1),
    };
    let item = RegistryKey::parse(name).with_context(|| format!("invalid item '{name}'"))?;
    Ok(ItemStack::new(item, count))
}

/// Deterministic command script runner.
///
/// Scripts are a simple list of `{tick, command}` steps, executed in file order.
#[derive(Debug)]
pub struct CommandScriptPlayer {
    pending: VecDeque<CommandScriptStep>,
    last_tick: SimTick,
}

impl CommandScriptPlayer {
    /// Load a command script from a JSON file on disk.
    pub fn from_path(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read command script {}", path.display()))?;
        Self::from_str(&contents)
    }

    /// Load a command script from an in-memory JSON string.
    pub fn from_str(contents: &str) -> Result<Self> {
        let file: CommandScriptFile = serde_json::from_str(contents)?;
        if file.steps.is_empty() {
            anyhow::bail!("command script contains no steps");
        }

        let mut pending = VecDeque::with_capacity(file.steps.len());
        let mut last_tick: Option<u64> = None;
        for (index, step) in file.steps.into_iter().enumerate() {
            if let Some(prev) = last_tick {
                if step.tick < prev {
                    anyhow::bail!("command script steps must be sorted by tick");
                }
            }
            last_tick = Some(step.tick);

            let command = HostCommand::parse(step.command.trim())
                .with_context(|| format!("step {index}: '{}'", step.command))?;
            pending.push_back(CommandScriptStep {
                tick: SimTick(step.tick),
                command,
            });
        }

        Ok(Self {
            pending,
            last_tick: SimTick(last_tick.unwrap_or_default()),
        })
    }

    /// Drain and return all commands scheduled for ticks `<= tick`.
    pub fn drain_ready_commands(&mut self, tick: SimTick) -> Vec<HostCommand> {
        let mut commands = Vec::new();
        while self.pending.front().is_some_and(|step| step.tick <= tick) {
            if let Some(step) = self.pending.pop_front() {
                commands.push(step.command);
            }
        }
        commands
    }

    /// Tick of the final step.
    pub fn last_tick(&self) -> SimTick {
        self.last_tick
    }

    pub fn is_finished(&self) -> bool {
        self.pending.is_empty()
    }
}
