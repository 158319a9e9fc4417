//! Sample of Kinetics action classes the pre-trained models can recognize.
//!
//! This is an illustrative subset, not the full taxonomy.

/// Number of labels shown after a successful setup.
pub const SAMPLE_LEN: usize = 10;

/// Trailer printed after the sample.
pub const REMAINING_ACTIONS_NOTE: &str = "... and 590+ more actions!";

static KINETICS_ACTIONS: [&str; 33] = [
    "walking",
    "running",
    "jumping",
    "sitting",
    "standing",
    "waving",
    "clapping",
    "dancing",
    "eating",
    "drinking",
    "cooking",
    "driving",
    "reading",
    "writing",
    "typing",
    "playing basketball",
    "playing guitar",
    "swimming",
    "cycling",
    "exercising",
    "talking",
    "laughing",
    "hugging",
    "kissing",
    "shaking hands",
    "opening door",
    "closing door",
    "pushing",
    "pulling",
    "climbing",
    "falling",
    "sleeping",
    "yoga",
];

pub fn action_labels() -> &'static [&'static str] {
    &KINETICS_ACTIONS
}

pub fn sample_labels() -> &'static [&'static str] {
    &KINETICS_ACTIONS[..SAMPLE_LEN]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_list_has_33_entries() {
        assert_eq!(action_labels().len(), 33);
    }

    #[test]
    fn list_is_stable_across_calls() {
        assert_eq!(action_labels(), action_labels());
        assert_eq!(action_labels().first(), Some(&"walking"));
        assert_eq!(action_labels().last(), Some(&"yoga"));
    }

    #[test]
    fn sample_is_prefix_of_full_list() {
        let sample = sample_labels();
        assert_eq!(sample.len(), 10);
        assert_eq!(sample, &action_labels()[..10]);
        assert_eq!(sample[9], "drinking");
    }
}
