//! Synonym Table
//!
//! Many-to-one mapping from surface words to a canonical root that should
//! have an animation. Entries are hints only: the resolver re-verifies every
//! target against the asset store before emitting it.

use std::collections::HashMap;

/// Built-in surface word -> canonical root entries
pub const BUILTIN_SYNONYMS: &[(&str, &str)] = &[
    // Greetings & basics
    ("HI", "HELLO"),
    ("HEY", "HELLO"),
    ("GREETINGS", "HELLO"),
    ("THANKS", "THANKYOU"),
    ("THANK", "THANKYOU"),
    ("OK", "AGREE"),
    ("OKAY", "AGREE"),
    ("YES", "AGREE"),
    ("YESP", "AGREE"),
    ("NO", "CANCEL"),
    ("NOT", "CANCEL"),
    ("NEGATIVE", "CANCEL"),
    ("AWESOME", "GOOD"),
    ("GREAT", "GOOD"),
    ("FANTASTIC", "GOOD"),
    ("NICE", "GOOD"),
    ("HAPPY", "GOOD"),
    ("GOODBYE", "BYE"),
    ("FAREWELL", "BYE"),
    // Adjectives
    ("FAST", "QUICK"),
    ("RAPID", "QUICK"),
    ("SPEEDY", "QUICK"),
    ("LARGE", "BIG"),
    ("HUGE", "BIG"),
    ("GIANT", "BIG"),
    ("MASSIVE", "BIG"),
    ("SMALL", "LITTLE"),
    ("TINY", "LITTLE"),
    ("MINI", "LITTLE"),
    ("SAD", "BAD"),
    ("UPSET", "BAD"),
    ("REJECT", "BAD"),
    ("PRETTY", "BEAUTIFUL"),
    ("LOVELY", "BEAUTIFUL"),
    ("HARD", "DIFFICULT"),
    ("TOUGH", "DIFFICULT"),
    ("SIMPLE", "EASY"),
    // People & roles
    ("INSTRUCTOR", "TEACHER"),
    ("PROFESSOR", "TEACHER"),
    ("LECTURER", "TEACHER"),
    ("STUDENT", "CHILD"),
    ("PUPIL", "CHILD"),
    ("LEARNER", "CHILD"),
    ("PHYSICIAN", "DOCTOR"),
    ("SURGEON", "DOCTOR"),
    ("CLINIC", "DOCTOR"),
    ("MECHANIC", "ENGINEER"),
    ("MALE", "MAN"),
    ("GUY", "MAN"),
    ("WOMAN", "GIRL"),
    ("FEMALE", "GIRL"),
    ("SHE", "GIRL"),
    // Objects & places
    ("AUTO", "CAR"),
    ("VEHICLE", "CAR"),
    ("CAB", "CAR"),
    ("PLANE", "AEROPLANE"),
    ("FLIGHT", "AEROPLANE"),
    ("BICYCLE", "CYCLE"),
    ("BIKE", "CYCLE"),
    ("MOTORCYCLE", "CYCLE"),
    ("HOUSE", "HOME"),
    ("RESIDENCE", "HOME"),
    ("FLAT", "HOME"),
    ("CABINET", "ALMIRAH"),
    ("SEAT", "CHAIR"),
    ("NOVEL", "BOOK"),
    ("PENCIL", "PEN"),
    // Verbs
    ("START", "BEGIN"),
    ("INITIATE", "BEGIN"),
    ("STOP", "FINISH"),
    ("END", "FINISH"),
    ("DONE", "FINISH"),
    ("COMPLETE", "FINISH"),
    ("TRUE", "CORRECT"),
    ("RIGHT", "CORRECT"),
    ("FALSE", "MISTAKE"),
    ("WRONG", "MISTAKE"),
    ("ERROR", "MISTAKE"),
    ("DRINK", "DRINKING"),
    ("SLEEP", "NIGHT"),
    ("BED", "NIGHT"),
    ("HAVE", "GET"),
    ("HAS", "GET"),
    ("HAD", "GET"),
    ("POSSESS", "GET"),
    ("OWN", "GET"),
    ("IT", "THAT"),
    ("ASK", "questions"),
    ("BELIEVE", "THINK"),
    ("BECAUSE", "REASON"),
    ("CRUCIAL", "important"),
    ("SIGNIFICANT", "important"),
    ("ESSENTIAL", "important"),
    // Time
    ("CURRENT", "NOW"),
    ("YESTERDAY", "BEFORE"),
    // STEM
    ("ISSUE", "PROBLEM"),
    ("STRENGTH", "POWER"),
    ("ENERGY", "POWER"),
    ("MOTOR", "ENGINE"),
    ("DIGIT", "NUMBER"),
    ("AMOUNT", "NUMBER"),
    ("OUTCOME", "RESULT"),
    ("IDENTICAL", "SAME"),
    ("PLUS", "ADD"),
    ("ADDITION", "ADD"),
    ("CONSTRUCT", "BUILD"),
    ("ASSEMBLE", "BUILD"),
    ("SHUT", "CLOSE"),
    ("CONTRAST", "COMPARE"),
    ("DUPLICATE", "COPY"),
    ("CLONE", "COPY"),
    ("TALLY", "COUNT"),
    ("SLICE", "CUT"),
    ("TRIM", "CUT"),
    ("POUR", "FILL"),
    ("DISCOVER", "FIND"),
    ("LOCATE", "FIND"),
    ("SOAR", "FLY"),
    ("RAISE", "INCREASE"),
    ("GROW", "INCREASE"),
    ("CONNECT", "JOIN"),
    ("LINK", "JOIN"),
    ("HOLD", "KEEP"),
    ("MAINTAIN", "KEEP"),
    ("CREATE", "MAKE"),
    ("PRODUCE", "MAKE"),
    ("LABEL", "MARK"),
    ("REQUIRE", "NEED"),
    ("MUST", "NEED"),
    ("UNLOCK", "OPEN"),
    ("TRANSFER", "PASS"),
    ("PLACE", "PUT"),
    ("SET", "PUT"),
    ("ARRIVE", "REACH"),
    ("ACHIEVE", "REACH"),
    ("DELETE", "REMOVE"),
    ("ERASE", "REMOVE"),
    ("STORE", "SAVE"),
    ("PRESERVE", "SAVE"),
    ("LOOK", "SEARCH"),
    ("SEEK", "SEARCH"),
    ("DELIVER", "SEND"),
    ("TRANSMIT", "SEND"),
    ("DISPLAY", "SHOW"),
    ("DEMONSTRATE", "SHOW"),
    ("FEEL", "TOUCH"),
    ("CONTACT", "TOUCH"),
    ("ROTATE", "TURN"),
    ("SPIN", "TURN"),
    ("CLEAN", "WASH"),
    ("RINSE", "WASH"),
    ("FRESH", "NEW"),
    ("RECENT", "NEW"),
    ("ANCIENT", "OLD"),
    ("PREVIOUS", "OLD"),
    ("LENGTHY", "LONG"),
    ("EXTENDED", "LONG"),
    ("BRIEF", "SHORT"),
    ("NOISY", "LOUD"),
    ("SILENT", "QUIET"),
    ("CALM", "QUIET"),
    ("GRADUAL", "SLOW"),
    ("GENTLE", "SOFT"),
    ("VACANT", "EMPTY"),
    ("BLANK", "EMPTY"),
    ("VARIOUS", "DIFFERENT"),
    ("DIVERSE", "DIFFERENT"),
    ("BROAD", "WIDE"),
    ("NARROW", "TIGHT"),
    ("BELOW", "UNDER"),
    ("BENEATH", "UNDER"),
    ("ROUND", "CIRCLE"),
    ("SPHERE", "CIRCLE"),
    ("SQUARE", "POWER TWO"),
    ("CUBE", "POWER THREE"),
];

/// Immutable surface -> canonical mapping, keys and targets uppercased
#[derive(Debug, Clone, Default)]
pub struct SynonymTable {
    entries: HashMap<String, String>,
}

impl SynonymTable {
    /// Built-in entries only
    pub fn builtin() -> Self {
        Self::from_pairs(BUILTIN_SYNONYMS.iter().copied())
    }

    /// Built-in entries overlaid with custom ones (custom wins)
    pub fn with_overrides(custom: &HashMap<String, String>) -> Self {
        let mut table = Self::builtin();
        for (surface, target) in custom {
            table.insert(surface, target);
        }
        table
    }

    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut table = Self::default();
        for (surface, target) in pairs {
            table.insert(surface.as_ref(), target.as_ref());
        }
        table
    }

    fn insert(&mut self, surface: &str, target: &str) {
        let surface = surface.trim().to_uppercase();
        let target = target.trim().to_uppercase();
        if !surface.is_empty() && !target.is_empty() {
            self.entries.insert(surface, target);
        }
    }

    /// Canonical root for a surface word, if any
    pub fn lookup(&self, word: &str) -> Option<&str> {
        self.entries.get(&word.to_uppercase()).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries sorted by surface word
    pub fn entries(&self) -> Vec<(&str, &str)> {
        let mut entries: Vec<(&str, &str)> = self
            .entries
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        entries.sort();
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_targets_case_normalized() {
        let table = SynonymTable::builtin();
        assert_eq!(table.lookup("ask"), Some("QUESTIONS"));
        assert_eq!(table.lookup("CRUCIAL"), Some("IMPORTANT"));
        assert_eq!(table.lookup("Hi"), Some("HELLO"));
        assert_eq!(table.lookup("glorptastic"), None);
    }

    #[test]
    fn test_many_to_one() {
        let table = SynonymTable::builtin();
        for surface in ["HAVE", "HAS", "HAD", "POSSESS", "OWN"] {
            assert_eq!(table.lookup(surface), Some("GET"));
        }
    }

    #[test]
    fn test_overrides_win() {
        let custom = HashMap::from([
            ("hi".to_string(), "wave".to_string()),
            ("atom".to_string(), "particle".to_string()),
        ]);
        let table = SynonymTable::with_overrides(&custom);
        assert_eq!(table.lookup("HI"), Some("WAVE"));
        assert_eq!(table.lookup("ATOM"), Some("PARTICLE"));
        assert_eq!(table.len(), SynonymTable::builtin().len() + 1);
    }
}
