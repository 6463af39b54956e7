//! Example Game - A small text adventure demonstrating combat_core
//!
//! This game shows:
//! - Enemies spawned from the bundled enemy catalog
//! - Attacks with counter-hits, armor absorption and breakage
//! - Ambient enemy aggression after non-combat commands
//! - Equipping weapons and armor, drinking potions, resting
//! - Saving and loading the character as JSON

use clap::Parser;
use combat_core::prelude::*;
use combat_core::combat::examine_enemy;
use combat_core::config::ItemKind;
use combat_core::{CharacterSnapshot, RestOutcome};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::collections::HashMap;
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Raw damage range of the debug `damage` command
const DEBUG_DAMAGE_MIN: u32 = 10;
const DEBUG_DAMAGE_MAX: u32 = 40;

/// Play a short text adventure in the terminal
#[derive(Parser, Debug)]
struct Args {
    /// Seed for every random roll (random if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    log: String,

    /// Where `save` and `load` read and write the character
    #[arg(long, default_value = "save.json")]
    save_file: PathBuf,
}

/// A room of the map
struct Room {
    name: &'static str,
    description: &'static str,
    exits: &'static [(&'static str, &'static str)],
    enemies: &'static [&'static str],
}

static ROOMS: &[(&str, Room)] = &[
    (
        "clearing",
        Room {
            name: "Forest Clearing",
            description: "Sunlight falls through a gap in the canopy.",
            exits: &[("north", "forest"), ("east", "camp")],
            enemies: &["slime"],
        },
    ),
    (
        "forest",
        Room {
            name: "Dark Forest",
            description: "The trees press close and something growls nearby.",
            exits: &[("south", "clearing"), ("down", "crypt")],
            enemies: &["goblin", "goblin", "wolf"],
        },
    ),
    (
        "crypt",
        Room {
            name: "Old Crypt",
            description: "Cold stone and the smell of dust.",
            exits: &[("up", "forest")],
            enemies: &["skeleton", "shadow"],
        },
    ),
    (
        "camp",
        Room {
            name: "Abandoned Camp",
            description: "A cold fire pit and a torn tent.",
            exits: &[("west", "clearing")],
            enemies: &["orc"],
        },
    ),
];

/// What a command did, for the ambient pass
struct Turn {
    action: PlayerAction,
    message: String,
}

impl Turn {
    fn new(action: PlayerAction, message: impl Into<String>) -> Self {
        Turn {
            action,
            message: message.into(),
        }
    }
}

/// Main game state
struct GameState {
    character: Character,
    locations: Locations,
    location: String,
    rooms: HashMap<&'static str, &'static Room>,
    enemies: EnemyCatalog,
    items: ItemCatalog,
    constants: CombatConstants,
    engine: CombatEngine<RandSource<ChaCha8Rng>>,
    save_file: PathBuf,
    running: bool,
}

impl GameState {
    fn new(seed: u64, save_file: PathBuf) -> Self {
        let constants = CombatConstants::bundled();
        let enemies = EnemyCatalog::with_defaults();
        let items = ItemCatalog::with_defaults();

        let mut locations = Locations::new();
        for (id, room) in ROOMS {
            locations.populate(id, room.enemies, &enemies);
        }

        let mut character = Character::new(&constants);
        for key in ["rusted_dagger", "leather_helmet", "cloth_shirt", "health_potion", "health_potion"] {
            character.inventory.add(key, 1);
        }

        GameState {
            character,
            locations,
            location: "clearing".to_string(),
            rooms: ROOMS.iter().map(|(id, room)| (*id, room)).collect(),
            enemies,
            items,
            engine: CombatEngine::new(RandSource::new(ChaCha8Rng::seed_from_u64(seed)), &constants),
            constants,
            save_file,
            running: true,
        }
    }

    fn room(&self) -> Option<&'static Room> {
        self.rooms.get(self.location.as_str()).copied()
    }

    /// Run one command line, returning everything to print
    fn handle(&mut self, line: &str) -> String {
        let line = line.trim();
        let (verb, argument) = line.split_once(' ').unwrap_or((line, ""));
        let argument = argument.trim();

        let turn = match verb.to_lowercase().as_str() {
            "" => return String::new(),
            "help" => Turn::new(PlayerAction::Other, HELP),
            "look" | "l" | "examine" | "x" => Turn::new(PlayerAction::Look, self.look(argument)),
            "go" => self.go(argument),
            "north" | "south" | "east" | "west" | "up" | "down" => self.go(verb),
            "attack" | "a" => self.attack(argument),
            "equip" | "wield" | "wear" => self.equip(argument),
            "unequip" | "remove" => self.unequip(argument),
            "drink" => self.drink(argument),
            "inventory" | "i" => Turn::new(PlayerAction::Inventory, self.inventory()),
            "armor" => Turn::new(PlayerAction::Status, self.armor_status()),
            "status" | "health" => Turn::new(PlayerAction::Status, self.status()),
            "sleep" => self.sleep(argument),
            "damage" => self.debug_damage(),
            "xp" => self.debug_xp(argument),
            "save" => Turn::new(PlayerAction::Other, self.save()),
            "load" => Turn::new(PlayerAction::Other, self.load()),
            "clear" => Turn::new(PlayerAction::Clear, "\n".repeat(40)),
            "quit" | "exit" => {
                self.running = false;
                return "Farewell.".to_string();
            }
            _ => Turn::new(PlayerAction::Other, format!("I don't understand '{}'.", verb)),
        };

        let mut output = turn.message;
        let report = self
            .engine
            .after_action(turn.action, &mut self.character, &self.locations, &self.location);
        if !report.is_empty() {
            output.push('\n');
            output.push_str(&report.summary());
        }
        output
    }

    fn look(&self, argument: &str) -> String {
        if argument.is_empty() {
            return self.describe();
        }
        match examine_enemy(self.locations.enemies_at(&self.location), &self.enemies, argument) {
            Ok(report) => report.summary(),
            Err(_) => format!("You don't see any '{}' here.", argument),
        }
    }

    fn describe(&self) -> String {
        let Some(room) = self.room() else {
            return "You are nowhere at all.".to_string();
        };
        let mut lines = vec![room.name.to_string(), room.description.to_string()];

        let enemies = self.locations.enemies_at(&self.location);
        if !enemies.is_empty() {
            let names: Vec<String> = enemies
                .iter()
                .map(|e| format!("{} ({}/{})", e.name, e.health, e.max_health))
                .collect();
            lines.push(format!("Enemies: {}", names.join(", ")));
        }

        let exits: Vec<&str> = room.exits.iter().map(|(dir, _)| *dir).collect();
        lines.push(format!("Exits: {}", exits.join(", ")));
        lines.join("\n")
    }

    fn go(&mut self, direction: &str) -> Turn {
        let destination = self
            .room()
            .and_then(|room| room.exits.iter().find(|(dir, _)| dir.eq_ignore_ascii_case(direction)))
            .map(|(_, to)| *to);

        match destination {
            Some(to) => {
                self.location = to.to_string();
                Turn::new(PlayerAction::Move, self.describe())
            }
            None => Turn::new(PlayerAction::Move, "You can't go that way."),
        }
    }

    fn attack(&mut self, argument: &str) -> Turn {
        let message = match self
            .engine
            .attack(&mut self.character, &mut self.locations, &self.location, argument)
        {
            Ok(outcome) => outcome.summary(),
            Err(err) => err.to_string(),
        };
        Turn::new(PlayerAction::Attack, message)
    }

    fn equip(&mut self, argument: &str) -> Turn {
        let Some(key) = self.items.find(argument) else {
            return Turn::new(PlayerAction::Equip, format!("You don't have any {}.", argument));
        };

        let mut loadout = self.character.loadout(&self.items);
        let message = match self.items.kind(&key) {
            ItemKind::Armor => loadout.equip_armor(&key).map(|change| match change.displaced {
                Some(previous) => format!("You take off the {} and equip the {}.", previous, change.equipped),
                None => format!("You equip the {}.", change.equipped),
            }),
            _ => loadout
                .equip_weapon(&key)
                .map(|weapon| format!("You equip the {}.", weapon.name)),
        };
        Turn::new(PlayerAction::Equip, message.unwrap_or_else(|err| err.to_string()))
    }

    fn unequip(&mut self, argument: &str) -> Turn {
        let mut loadout = self.character.loadout(&self.items);
        let message = if argument.eq_ignore_ascii_case("weapon") || argument.is_empty() {
            match loadout.unequip_weapon() {
                Some(weapon) => format!("You unequip the {}.", weapon.name),
                None => "You don't have anything equipped.".to_string(),
            }
        } else {
            ArmorSlot::from_key(argument)
                .ok_or_else(|| CombatError::InvalidSlot(argument.to_string()))
                .and_then(|slot| loadout.unequip_armor(slot))
                .map(|name| format!("You unequip the {}.", name))
                .unwrap_or_else(|err| err.to_string())
        };
        Turn::new(PlayerAction::Equip, message)
    }

    fn drink(&mut self, argument: &str) -> Turn {
        let key = self.items.find(argument).unwrap_or_else(|| argument.to_string());
        let name = self.items.display_name(&key);
        let message = match self.character.loadout(&self.items).drink_potion(&key) {
            Ok(healed) => format!("You drink the {}. (Healed {} across damaged body parts)", name, healed),
            Err(err) => err.to_string(),
        };
        Turn::new(PlayerAction::UseItem, message)
    }

    fn inventory(&self) -> String {
        if self.character.inventory.is_empty() {
            return "You are carrying nothing.".to_string();
        }
        let mut lines = vec!["You are carrying:".to_string()];
        for (key, count) in self.character.inventory.items() {
            let wielded = self.character.weapon.as_ref().is_some_and(|w| w.key == key);
            lines.push(format!(
                "  {} x{}{}",
                self.items.display_name(key),
                count,
                if wielded { " (wielded)" } else { "" }
            ));
        }
        lines.join("\n")
    }

    fn armor_status(&self) -> String {
        let status = self.character.armor.status();
        if status.is_empty() {
            return "You are not wearing any armor.".to_string();
        }
        status
            .iter()
            .map(|s| {
                format!(
                    "{}: {} ({}/{}, {}%)",
                    s.slot.label(),
                    s.name,
                    s.durability,
                    s.max_durability,
                    s.percent
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn status(&self) -> String {
        let character = &self.character;
        let mut lines = vec![
            format!("Health: {}%", character.aggregate_health()),
            format!(
                "Level {} ({} XP)",
                character.progression.level(),
                character.progression.progress_label()
            ),
        ];
        if let Some(weapon) = &character.weapon {
            lines.push(format!("Wielding: {} ({} damage)", weapon.name, weapon.attack));
        }
        for (part, health) in character.body.parts() {
            lines.push(format!("  {:<10} {:>3}/{}", part.name(), health.current, health.max));
        }
        lines.join("\n")
    }

    fn sleep(&mut self, argument: &str) -> Turn {
        let Some((hours, minutes)) = parse_duration(argument) else {
            return Turn::new(PlayerAction::Sleep, "Sleep for how long? Use hh:mm, e.g. 'sleep 02:30'.");
        };
        let RestOutcome {
            flat_healed,
            trickle_healed,
        } = self.engine.rest(&mut self.character, hours, minutes);
        Turn::new(
            PlayerAction::Sleep,
            format!(
                "You sleep for {}h{:02}m and recover {} health. Health: {}%",
                hours,
                minutes,
                flat_healed + trickle_healed,
                self.character.aggregate_health()
            ),
        )
    }

    fn debug_damage(&mut self) -> Turn {
        let raw = self.engine.rng_mut().next_int(DEBUG_DAMAGE_MIN, DEBUG_DAMAGE_MAX);
        let hit = self.engine.damage_random_part(&mut self.character, raw);
        let mut message = hit.summary("world");
        if hit.is_fatal() {
            message.push_str("\nYou have been defeated!");
        }
        Turn::new(PlayerAction::Other, message)
    }

    fn debug_xp(&mut self, argument: &str) -> Turn {
        let amount = argument.parse().unwrap_or(self.constants.kill_xp);
        let gained = self.character.progression.award_xp(amount);
        let mut message = format!("You gain {} XP ({}).", amount, self.character.progression.progress_label());
        if gained > 0 {
            message.push_str(&format!("\nYou reached level {}!", self.character.progression.level()));
        }
        Turn::new(PlayerAction::Other, message)
    }

    fn save(&self) -> String {
        let result = CharacterSnapshot::capture(&self.character)
            .to_json()
            .map_err(|err| err.to_string())
            .and_then(|json| fs::write(&self.save_file, json).map_err(|err| err.to_string()));
        match result {
            Ok(()) => format!("Saved to {}.", self.save_file.display()),
            Err(err) => format!("Could not save: {}", err),
        }
    }

    fn load(&mut self) -> String {
        let snapshot = fs::read_to_string(&self.save_file)
            .map_err(|err| err.to_string())
            .and_then(|json| CharacterSnapshot::from_json(&json).map_err(|err| err.to_string()));
        match snapshot {
            Ok(snapshot) => {
                self.character = snapshot.restore(&self.items, &self.constants);
                format!("Loaded {}.", self.save_file.display())
            }
            Err(err) => format!("Could not load: {}", err),
        }
    }
}

const HELP: &str = "\
Commands:
  look [enemy] [n], go <dir>, attack <enemy> [n]
  equip <item>, unequip <weapon|head_armor|torso_armor|leggings>
  drink <potion>, inventory, armor, status
  sleep hh:mm, save, load, clear, quit
  damage, xp [amount]  (debug)";

/// Parse "hh:mm" (or a bare hour count)
fn parse_duration(text: &str) -> Option<(u32, u32)> {
    let (hours, minutes) = text.split_once(':').unwrap_or((text, "0"));
    let hours: u32 = hours.trim().parse().ok()?;
    let minutes: u32 = minutes.trim().parse().ok()?;
    (minutes < 60).then_some((hours, minutes))
}

fn main() -> io::Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log)))
        .with_writer(io::stderr)
        .init();

    let seed = args.seed.unwrap_or_else(rand::random);
    tracing::info!("Starting with seed {}", seed);

    let mut state = GameState::new(seed, args.save_file);
    println!("{}\n\n{}", HELP, state.describe());

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut lines = stdin.lock().lines();

    while state.running {
        print!("> ");
        stdout.flush()?;
        let Some(line) = lines.next() else {
            break;
        };
        let output = state.handle(&line?);
        if !output.is_empty() {
            println!("{}", output);
        }
        if state.character.is_defeated() {
            println!("Your adventure ends here.");
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game() -> GameState {
        GameState::new(42, PathBuf::from("unused.json"))
    }

    #[test]
    fn test_parse_duration() {
        assert_eq!(parse_duration("02:30"), Some((2, 30)));
        assert_eq!(parse_duration("8"), Some((8, 0)));
        assert_eq!(parse_duration("1:75"), None);
        assert_eq!(parse_duration("soon"), None);
    }

    #[test]
    fn test_every_exit_leads_to_a_room() {
        let state = game();
        for (_, room) in ROOMS {
            for (_, to) in room.exits {
                assert!(state.rooms.contains_key(to), "Dangling exit to {}", to);
            }
        }
    }

    #[test]
    fn test_starting_room_has_slime() {
        let state = game();
        assert_eq!(state.locations.enemies_at("clearing")[0].enemy_type, "slime");
        assert!(state.describe().contains("Slime"));
    }

    #[test]
    fn test_equip_and_unequip_commands() {
        let mut state = game();
        assert!(state.handle("equip rusted dagger").starts_with("You equip the Rusted Dagger."));
        assert!(state.character.weapon.is_some());
        assert!(state.handle("equip leather helmet").starts_with("You equip the Leather Helmet."));
        assert!(state.handle("unequip head_armor").starts_with("You unequip the Leather Helmet."));
        assert!(state.character.inventory.has("leather_helmet"));
    }

    #[test]
    fn test_attack_unknown_target() {
        let mut state = game();
        assert_eq!(state.handle("attack dragon"), "There is no 'dragon' here to attack.");
        assert_eq!(state.handle("attack"), "Attack what?");
    }

    #[test]
    fn test_look_at_enemy() {
        let mut state = game();
        let output = state.handle("look slime");
        assert!(output.starts_with("Slime (1): 20/20 HP. A wobbly green slime."), "{}", output);
        assert!(state.handle("examine dragon").starts_with("You don't see any 'dragon' here."));
    }

    #[test]
    fn test_quit_stops_loop() {
        let mut state = game();
        state.handle("quit");
        assert!(!state.running);
    }
}
