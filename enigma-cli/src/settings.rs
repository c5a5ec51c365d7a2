use clap::Args;
use enigma_core::{MachineConfig, Permutation, Result};
use serde::Serialize;

/// Machine settings as given on the command line.
#[derive(Args, Debug)]
pub(crate) struct SettingsArgs {
    /// Rotor numbers from the catalog (1-5), rightmost (fastest) rotor first
    #[arg(short, long, value_delimiter = ',', default_values_t = [2, 1, 3])]
    pub(crate) rotors: Vec<usize>,

    /// Reflector number from the catalog (1-4)
    #[arg(long, default_value_t = 1)]
    pub(crate) reflector: usize,

    /// Start position letters, one per rotor in the same order as --rotors [default: all A]
    #[arg(short, long, value_name = "LETTERS")]
    pub(crate) positions: Option<String>,

    /// Plugboard cables as letter pairs, e.g. "AB CD EF"
    #[arg(long, value_name = "PAIRS", conflicts_with = "plugboard_table")]
    pub(crate) plugboard: Option<String>,

    /// Plugboard as a full 26-letter table, letter i being the partner of the i-th letter
    #[arg(long, value_name = "TABLE")]
    pub(crate) plugboard_table: Option<String>,
}

impl SettingsArgs {
    /// Turns the flags into machine settings, validating the plugboard notation.
    pub(crate) fn to_config(&self) -> Result<MachineConfig> {
        let plugboard = match (&self.plugboard, &self.plugboard_table) {
            (Some(pairs), _) => Permutation::from_pairs(pairs)?,
            (None, Some(table)) => Permutation::from_letters(table)?,
            (None, None) => Permutation::identity(),
        };
        let mut config =
            MachineConfig::new(self.rotors.clone(), self.reflector).with_plugboard(plugboard);
        if let Some(positions) = &self.positions {
            config = config.with_positions(positions.as_str());
        }
        Ok(config)
    }
}

/// Settings in a form that is easy to read off and type back in.
#[derive(Serialize, Debug)]
pub(crate) struct KeySheet {
    rotors: Vec<usize>,
    reflector: usize,
    positions: String,
    plugboard: String,
    plugboard_table: String,
}

impl KeySheet {
    pub(crate) fn new(config: &MachineConfig) -> Self {
        let plugboard = config
            .plugboard
            .pairs()
            .iter()
            .map(|(a, b)| format!("{a}{b}"))
            .collect::<Vec<_>>()
            .join(" ");
        Self {
            rotors: config.rotors.clone(),
            reflector: config.reflector,
            positions: config.positions.to_ascii_uppercase(),
            plugboard,
            plugboard_table: config.plugboard.to_string(),
        }
    }

    /// The `crypt` flags that reproduce these settings.
    pub(crate) fn to_flags(&self) -> String {
        let rotors = self
            .rotors
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(",");
        let mut flags = format!(
            "--rotors {rotors} --reflector {} --positions {}",
            self.reflector, self.positions
        );
        if !self.plugboard.is_empty() {
            flags.push_str(&format!(" --plugboard \"{}\"", self.plugboard));
        }
        flags
    }
}
