//! Region definitions and metadata for the standard Diplomacy map.
//!
//! Regions are identified by lowercase string keys. Split-coast provinces
//! have one extra key per coast, formed by suffixing the base key with
//! `_` and the coast abbreviation (`stp_nc`, `stp_sc`). The table is built
//! once and never mutated; the coastal alias relation is computed at
//! construction so queries never scan key strings.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::protocol::snapshot::SnapshotError;

/// Separator between a base region key and its coast suffix.
pub const COAST_SEPARATOR: char = '_';

/// The number of region keys on the standard map (75 provinces + 6 coasts).
pub const STANDARD_REGION_COUNT: usize = 81;

/// The number of supply centres on the standard map.
pub const SUPPLY_CENTRE_COUNT: usize = 34;

/// One of the seven great powers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Nation {
    Austria,
    England,
    France,
    Germany,
    Italy,
    Russia,
    Turkey,
}

/// All seven nations in standard order.
pub const ALL_NATIONS: [Nation; 7] = [
    Nation::Austria,
    Nation::England,
    Nation::France,
    Nation::Germany,
    Nation::Italy,
    Nation::Russia,
    Nation::Turkey,
];

impl Nation {
    /// Returns the lowercase full name of this nation.
    pub const fn name(self) -> &'static str {
        match self {
            Nation::Austria => "austria",
            Nation::England => "england",
            Nation::France => "france",
            Nation::Germany => "germany",
            Nation::Italy => "italy",
            Nation::Russia => "russia",
            Nation::Turkey => "turkey",
        }
    }

    /// Parses a nation from its lowercase full name.
    pub fn from_name(name: &str) -> Option<Nation> {
        ALL_NATIONS.iter().copied().find(|n| n.name() == name)
    }
}

/// Static metadata for a region.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionInfo {
    #[serde(default)]
    pub is_supply_centre: bool,
    #[serde(default)]
    pub home_nation: Option<Nation>,
}

/// Returns the base region of a key: everything before the coast separator.
pub fn base_region(key: &str) -> &str {
    key.split(COAST_SEPARATOR).next().unwrap_or(key)
}

/// Region metadata keyed by region string, plus the coastal alias relation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionTable {
    regions: BTreeMap<String, RegionInfo>,
    /// For each key, every other key sharing its base region, sorted.
    aliases: BTreeMap<String, Vec<String>>,
}

impl RegionTable {
    /// Builds the table for the standard map.
    pub fn standard() -> Self {
        Self::from_regions(
            STANDARD_REGIONS
                .iter()
                .map(|(key, info)| (key.to_string(), *info)),
        )
    }

    /// Builds a table from arbitrary entries, computing the alias relation.
    pub fn from_regions(entries: impl IntoIterator<Item = (String, RegionInfo)>) -> Self {
        let regions: BTreeMap<String, RegionInfo> = entries.into_iter().collect();

        let mut groups: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
        for key in regions.keys() {
            groups.entry(base_region(key)).or_default().push(key);
        }

        let mut aliases = BTreeMap::new();
        for (base, members) in &groups {
            for key in members {
                // The base key is never an alias: a unit on the inland key
                // does not occupy a specific coast.
                let others: Vec<String> = members
                    .iter()
                    .filter(|other| *other != key && *other != base)
                    .map(|other| other.to_string())
                    .collect();
                if !others.is_empty() {
                    aliases.insert(key.to_string(), others);
                }
            }
        }

        RegionTable { regions, aliases }
    }

    /// Parses a table from a JSON object of `key -> {isSupplyCentre, homeNation}`.
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        let entries: BTreeMap<String, RegionInfo> = serde_json::from_str(json)?;
        Ok(Self::from_regions(entries))
    }

    /// Reads and parses a JSON region table from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SnapshotError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| SnapshotError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Looks up the metadata for a region key.
    pub fn get(&self, key: &str) -> Option<&RegionInfo> {
        self.regions.get(key)
    }

    /// Returns true if the table declares this key.
    pub fn contains(&self, key: &str) -> bool {
        self.regions.contains_key(key)
    }

    /// Returns every other key sharing this key's base region, sorted.
    ///
    /// For a base key this is its coastal variants; for a coast key it is
    /// the parent region and the sibling coasts.
    pub fn aliases(&self, key: &str) -> &[String] {
        self.aliases.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Iterates over all region keys in ascending order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.regions.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}

impl Default for RegionTable {
    fn default() -> Self {
        Self::standard()
    }
}

/// Standard-map regions, sorted by key.
static STANDARD_REGIONS: [(&str, RegionInfo); STANDARD_REGION_COUNT] = [
    // Adriatic Sea
    ("adr", RegionInfo { is_supply_centre: false, home_nation: None }),
    // Aegean Sea
    ("aeg", RegionInfo { is_supply_centre: false, home_nation: None }),
    // Albania
    ("alb", RegionInfo { is_supply_centre: false, home_nation: None }),
    // Ankara
    ("ank", RegionInfo { is_supply_centre: true, home_nation: Some(Nation::Turkey) }),
    // Apulia
    ("apu", RegionInfo { is_supply_centre: false, home_nation: None }),
    // Armenia
    ("arm", RegionInfo { is_supply_centre: false, home_nation: None }),
    // Baltic Sea
    ("bal", RegionInfo { is_supply_centre: false, home_nation: None }),
    // Barents Sea
    ("bar", RegionInfo { is_supply_centre: false, home_nation: None }),
    // Belgium
    ("bel", RegionInfo { is_supply_centre: true, home_nation: None }),
    // Berlin
    ("ber", RegionInfo { is_supply_centre: true, home_nation: Some(Nation::Germany) }),
    // Black Sea
    ("bla", RegionInfo { is_supply_centre: false, home_nation: None }),
    // Bohemia
    ("boh", RegionInfo { is_supply_centre: false, home_nation: None }),
    // Gulf of Bothnia
    ("bot", RegionInfo { is_supply_centre: false, home_nation: None }),
    // Brest
    ("bre", RegionInfo { is_supply_centre: true, home_nation: Some(Nation::France) }),
    // Budapest
    ("bud", RegionInfo { is_supply_centre: true, home_nation: Some(Nation::Austria) }),
    // Bulgaria
    ("bul", RegionInfo { is_supply_centre: true, home_nation: None }),
    // Bulgaria (east coast)
    ("bul_ec", RegionInfo { is_supply_centre: false, home_nation: None }),
    // Bulgaria (south coast)
    ("bul_sc", RegionInfo { is_supply_centre: false, home_nation: None }),
    // Burgundy
    ("bur", RegionInfo { is_supply_centre: false, home_nation: None }),
    // Clyde
    ("cly", RegionInfo { is_supply_centre: false, home_nation: None }),
    // Constantinople
    ("con", RegionInfo { is_supply_centre: true, home_nation: Some(Nation::Turkey) }),
    // Denmark
    ("den", RegionInfo { is_supply_centre: true, home_nation: None }),
    // Eastern Mediterranean
    ("eas", RegionInfo { is_supply_centre: false, home_nation: None }),
    // Edinburgh
    ("edi", RegionInfo { is_supply_centre: true, home_nation: Some(Nation::England) }),
    // English Channel
    ("eng", RegionInfo { is_supply_centre: false, home_nation: None }),
    // Finland
    ("fin", RegionInfo { is_supply_centre: false, home_nation: None }),
    // Galicia
    ("gal", RegionInfo { is_supply_centre: false, home_nation: None }),
    // Gascony
    ("gas", RegionInfo { is_supply_centre: false, home_nation: None }),
    // Gulf of Lyon
    ("gol", RegionInfo { is_supply_centre: false, home_nation: None }),
    // Greece
    ("gre", RegionInfo { is_supply_centre: true, home_nation: None }),
    // Heligoland Bight
    ("hel", RegionInfo { is_supply_centre: false, home_nation: None }),
    // Holland
    ("hol", RegionInfo { is_supply_centre: true, home_nation: None }),
    // Ionian Sea
    ("ion", RegionInfo { is_supply_centre: false, home_nation: None }),
    // Irish Sea
    ("iri", RegionInfo { is_supply_centre: false, home_nation: None }),
    // Kiel
    ("kie", RegionInfo { is_supply_centre: true, home_nation: Some(Nation::Germany) }),
    // London
    ("lon", RegionInfo { is_supply_centre: true, home_nation: Some(Nation::England) }),
    // Livonia
    ("lvn", RegionInfo { is_supply_centre: false, home_nation: None }),
    // Liverpool
    ("lvp", RegionInfo { is_supply_centre: true, home_nation: Some(Nation::England) }),
    // Mid-Atlantic Ocean
    ("mao", RegionInfo { is_supply_centre: false, home_nation: None }),
    // Marseilles
    ("mar", RegionInfo { is_supply_centre: true, home_nation: Some(Nation::France) }),
    // Moscow
    ("mos", RegionInfo { is_supply_centre: true, home_nation: Some(Nation::Russia) }),
    // Munich
    ("mun", RegionInfo { is_supply_centre: true, home_nation: Some(Nation::Germany) }),
    // North Africa
    ("naf", RegionInfo { is_supply_centre: false, home_nation: None }),
    // North Atlantic Ocean
    ("nao", RegionInfo { is_supply_centre: false, home_nation: None }),
    // Naples
    ("nap", RegionInfo { is_supply_centre: true, home_nation: Some(Nation::Italy) }),
    // Norwegian Sea
    ("nrg", RegionInfo { is_supply_centre: false, home_nation: None }),
    // North Sea
    ("nth", RegionInfo { is_supply_centre: false, home_nation: None }),
    // Norway
    ("nwy", RegionInfo { is_supply_centre: true, home_nation: None }),
    // Paris
    ("par", RegionInfo { is_supply_centre: true, home_nation: Some(Nation::France) }),
    // Picardy
    ("pic", RegionInfo { is_supply_centre: false, home_nation: None }),
    // Piedmont
    ("pie", RegionInfo { is_supply_centre: false, home_nation: None }),
    // Portugal
    ("por", RegionInfo { is_supply_centre: true, home_nation: None }),
    // Prussia
    ("pru", RegionInfo { is_supply_centre: false, home_nation: None }),
    // Rome
    ("rom", RegionInfo { is_supply_centre: true, home_nation: Some(Nation::Italy) }),
    // Ruhr
    ("ruh", RegionInfo { is_supply_centre: false, home_nation: None }),
    // Rumania
    ("rum", RegionInfo { is_supply_centre: true, home_nation: None }),
    // Serbia
    ("ser", RegionInfo { is_supply_centre: true, home_nation: None }),
    // Sevastopol
    ("sev", RegionInfo { is_supply_centre: true, home_nation: Some(Nation::Russia) }),
    // Silesia
    ("sil", RegionInfo { is_supply_centre: false, home_nation: None }),
    // Skagerrak
    ("ska", RegionInfo { is_supply_centre: false, home_nation: None }),
    // Smyrna
    ("smy", RegionInfo { is_supply_centre: true, home_nation: Some(Nation::Turkey) }),
    // Spain
    ("spa", RegionInfo { is_supply_centre: true, home_nation: None }),
    // Spain (north coast)
    ("spa_nc", RegionInfo { is_supply_centre: false, home_nation: None }),
    // Spain (south coast)
    ("spa_sc", RegionInfo { is_supply_centre: false, home_nation: None }),
    // St. Petersburg
    ("stp", RegionInfo { is_supply_centre: true, home_nation: Some(Nation::Russia) }),
    // St. Petersburg (north coast)
    ("stp_nc", RegionInfo { is_supply_centre: false, home_nation: None }),
    // St. Petersburg (south coast)
    ("stp_sc", RegionInfo { is_supply_centre: false, home_nation: None }),
    // Sweden
    ("swe", RegionInfo { is_supply_centre: true, home_nation: None }),
    // Syria
    ("syr", RegionInfo { is_supply_centre: false, home_nation: None }),
    // Trieste
    ("tri", RegionInfo { is_supply_centre: true, home_nation: Some(Nation::Austria) }),
    // Tunisia
    ("tun", RegionInfo { is_supply_centre: true, home_nation: None }),
    // Tuscany
    ("tus", RegionInfo { is_supply_centre: false, home_nation: None }),
    // Tyrolia
    ("tyr", RegionInfo { is_supply_centre: false, home_nation: None }),
    // Tyrrhenian Sea
    ("tys", RegionInfo { is_supply_centre: false, home_nation: None }),
    // Ukraine
    ("ukr", RegionInfo { is_supply_centre: false, home_nation: None }),
    // Venice
    ("ven", RegionInfo { is_supply_centre: true, home_nation: Some(Nation::Italy) }),
    // Vienna
    ("vie", RegionInfo { is_supply_centre: true, home_nation: Some(Nation::Austria) }),
    // Wales
    ("wal", RegionInfo { is_supply_centre: false, home_nation: None }),
    // Warsaw
    ("war", RegionInfo { is_supply_centre: true, home_nation: Some(Nation::Russia) }),
    // Western Mediterranean
    ("wes", RegionInfo { is_supply_centre: false, home_nation: None }),
    // Yorkshire
    ("yor", RegionInfo { is_supply_centre: false, home_nation: None }),
];
