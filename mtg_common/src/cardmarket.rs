//! Cardmarket article enumerations.
//!
//! Cardmarket identifies conditions and languages by small integer ids
//! (the `data-condition` / `data-language` attributes on article rows).
//! Each enumeration knows its Moxfield import code and the full name
//! Deckbox expects.

/// Card condition as graded by Cardmarket (ids 1–7)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Condition {
    Mint,
    #[default]
    NearMint,
    Excellent,
    Good,
    LightPlayed,
    Played,
    Poor,
}

impl Condition {
    /// Look up a Cardmarket condition id
    pub fn from_id(id: i64) -> Option<Self> {
        match id {
            1 => Some(Condition::Mint),
            2 => Some(Condition::NearMint),
            3 => Some(Condition::Excellent),
            4 => Some(Condition::Good),
            5 => Some(Condition::LightPlayed),
            6 => Some(Condition::Played),
            7 => Some(Condition::Poor),
            _ => None,
        }
    }

    /// Cardmarket numeric id
    pub fn id(&self) -> u8 {
        match self {
            Condition::Mint => 1,
            Condition::NearMint => 2,
            Condition::Excellent => 3,
            Condition::Good => 4,
            Condition::LightPlayed => 5,
            Condition::Played => 6,
            Condition::Poor => 7,
        }
    }

    /// Moxfield condition code. Excellent is folded into Near Mint.
    pub fn moxfield_code(&self) -> &'static str {
        match self {
            Condition::Mint => "M",
            Condition::NearMint | Condition::Excellent => "NM",
            Condition::Good => "LP",
            Condition::LightPlayed => "MP",
            Condition::Played => "HP",
            Condition::Poor => "D",
        }
    }

    /// Condition name as written in Deckbox imports
    pub fn deckbox_name(&self) -> &'static str {
        match self {
            Condition::Mint => "Mint",
            Condition::NearMint | Condition::Excellent => "Near Mint",
            Condition::Good => "Good (Lightly Played)",
            Condition::LightPlayed => "Played",
            Condition::Played => "Heavily Played",
            Condition::Poor => "Poor",
        }
    }
}

/// Article language as listed on Cardmarket (ids 1–11)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Language {
    #[default]
    English,
    French,
    German,
    Spanish,
    Italian,
    SimplifiedChinese,
    Japanese,
    Portuguese,
    Russian,
    Korean,
    TraditionalChinese,
}

impl Language {
    /// Look up a Cardmarket language id
    pub fn from_id(id: i64) -> Option<Self> {
        match id {
            1 => Some(Language::English),
            2 => Some(Language::French),
            3 => Some(Language::German),
            4 => Some(Language::Spanish),
            5 => Some(Language::Italian),
            6 => Some(Language::SimplifiedChinese),
            7 => Some(Language::Japanese),
            8 => Some(Language::Portuguese),
            9 => Some(Language::Russian),
            10 => Some(Language::Korean),
            11 => Some(Language::TraditionalChinese),
            _ => None,
        }
    }

    /// Returns the full name of the language (e.g., "English", "German")
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::French => "French",
            Language::German => "German",
            Language::Spanish => "Spanish",
            Language::Italian => "Italian",
            Language::SimplifiedChinese => "Simplified Chinese",
            Language::Japanese => "Japanese",
            Language::Portuguese => "Portuguese",
            Language::Russian => "Russian",
            Language::Korean => "Korean",
            Language::TraditionalChinese => "Traditional Chinese",
        }
    }

    /// Moxfield language code (e.g., "en", "zhs")
    pub fn moxfield_code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::French => "fr",
            Language::German => "de",
            Language::Spanish => "es",
            Language::Italian => "it",
            Language::SimplifiedChinese => "zhs",
            Language::Japanese => "ja",
            Language::Portuguese => "pt",
            Language::Russian => "ru",
            Language::Korean => "ko",
            Language::TraditionalChinese => "zht",
        }
    }

    /// Returns all Cardmarket languages in id order
    pub fn all() -> &'static [Language] {
        &[
            Language::English,
            Language::French,
            Language::German,
            Language::Spanish,
            Language::Italian,
            Language::SimplifiedChinese,
            Language::Japanese,
            Language::Portuguese,
            Language::Russian,
            Language::Korean,
            Language::TraditionalChinese,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn condition_ids_map_to_moxfield_codes() {
        let codes: Vec<&str> = (1..=7)
            .map(|id| Condition::from_id(id).unwrap().moxfield_code())
            .collect();
        assert_eq!(codes, vec!["M", "NM", "NM", "LP", "MP", "HP", "D"]);
    }

    #[test]
    fn condition_out_of_range_is_none() {
        assert_eq!(Condition::from_id(0), None);
        assert_eq!(Condition::from_id(9), None);
        assert_eq!(Condition::from_id(-1), None);
    }

    #[test]
    fn condition_id_round_trips() {
        for id in 1..=7 {
            assert_eq!(Condition::from_id(id).unwrap().id() as i64, id);
        }
    }

    #[test]
    fn language_ids_follow_cardmarket_order() {
        for (i, lang) in Language::all().iter().enumerate() {
            assert_eq!(Language::from_id(i as i64 + 1), Some(*lang));
        }
        assert_eq!(Language::from_id(12), None);
        assert_eq!(Language::from_id(99), None);
    }

    #[test]
    fn language_codes() {
        assert_eq!(Language::English.moxfield_code(), "en");
        assert_eq!(Language::SimplifiedChinese.moxfield_code(), "zhs");
        assert_eq!(Language::TraditionalChinese.moxfield_code(), "zht");
        assert_eq!(Language::Japanese.as_str(), "Japanese");
    }

    #[test]
    fn defaults_are_near_mint_english() {
        assert_eq!(Condition::default().moxfield_code(), "NM");
        assert_eq!(Language::default().moxfield_code(), "en");
        assert_eq!(Condition::default(), Condition::NearMint);
        assert_eq!(Language::default(), Language::English);
    }
}
