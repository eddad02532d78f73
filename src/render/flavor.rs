//! Flavor text for the chat message
//!
//! One greeting, one status phrase, one call to action, each picked
//! independently from fixed pools. Production and staging carry different
//! pools so a rehearsal post is never mistaken for the real thing. The
//! choice function is injected so tests can pin it down.

use rand::rngs::ThreadRng;
use rand::seq::SliceRandom;

use crate::config::Environment;

const PROD_GREETINGS: &[&str] = &[
    "Good morning team!",
    "Hello everyone!",
    "Hey team, quick update.",
];

const PROD_STATUS: &[&str] = &[
    "Here is where the board stands today.",
    "Fresh status straight from the tracker.",
    "The latest task rundown is in.",
];

const PROD_CALLS: &[&str] = &[
    "Grab a task and run with it!",
    "Pick your next ticket below.",
    "Claims are open, dibs away!",
];

const STAGING_GREETINGS: &[&str] = &[
    "Beep boop, staging bot here.",
    "Greetings from the test channel.",
    "Hello from staging!",
];

const STAGING_STATUS: &[&str] = &[
    "This is a dry run of the board.",
    "Pretend status update incoming.",
    "Rehearsal rundown below.",
];

const STAGING_CALLS: &[&str] = &[
    "Feel free to ignore all of this.",
    "No need to claim anything here.",
    "Carry on, nothing real to see.",
];

/// Picks one phrase from a pool
pub trait PhrasePicker {
    fn pick(&mut self, pool: &'static [&'static str]) -> &'static str;
}

/// Uniform random phrase selection
pub struct RandomPicker {
    rng: ThreadRng,
}

impl RandomPicker {
    pub fn new() -> Self {
        Self {
            rng: rand::thread_rng(),
        }
    }
}

impl Default for RandomPicker {
    fn default() -> Self {
        Self::new()
    }
}

impl PhrasePicker for RandomPicker {
    fn pick(&mut self, pool: &'static [&'static str]) -> &'static str {
        pool.choose(&mut self.rng).copied().unwrap_or("")
    }
}

type Pools = (
    &'static [&'static str],
    &'static [&'static str],
    &'static [&'static str],
);

fn pools(environment: Environment) -> Pools {
    match environment {
        Environment::Production => (PROD_GREETINGS, PROD_STATUS, PROD_CALLS),
        Environment::Staging => (STAGING_GREETINGS, STAGING_STATUS, STAGING_CALLS),
    }
}

/// Composes the chat-message text: greeting, status, call to action
pub fn compose(environment: Environment, picker: &mut dyn PhrasePicker) -> String {
    let (greetings, statuses, calls) = pools(environment);
    format!(
        "{} {} {}",
        picker.pick(greetings),
        picker.pick(statuses),
        picker.pick(calls)
    )
}
