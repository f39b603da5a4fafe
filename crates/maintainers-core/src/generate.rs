//! Random MAINTAINERS file generation for benchmarking and testing.
//!
//! Lines are rendered from [`Maintainer`] values in one of the three
//! recognised layouts, so generated content always parses unless malformed
//! lines are requested explicitly.

use crate::maintainer::Maintainer;
use rand::prelude::*;
use rand::rngs::StdRng;

/// Configuration for generating MAINTAINERS files.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Number of maintainer lines to generate.
    pub num_maintainers: usize,
    /// Number of malformed lines to mix in.
    pub num_malformed: usize,
    /// Seed for deterministic generation.
    pub seed: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            num_maintainers: 100,
            num_malformed: 0,
            seed: 42,
        }
    }
}

impl GeneratorConfig {
    /// Create a new config with the given number of maintainers.
    pub fn new(num_maintainers: usize) -> Self {
        Self {
            num_maintainers,
            ..Default::default()
        }
    }

    /// Small fixture (~10 maintainers).
    pub fn small() -> Self {
        Self::new(10)
    }

    /// Medium fixture (~1000 maintainers).
    pub fn medium() -> Self {
        Self::new(1_000)
    }

    /// Large fixture (~100k maintainers).
    pub fn large() -> Self {
        Self::new(100_000)
    }

    /// Set the random seed for deterministic generation.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the number of malformed lines.
    pub fn with_malformed(mut self, num_malformed: usize) -> Self {
        self.num_malformed = num_malformed;
        self
    }
}

mod vocabulary {
    pub const FIRST_NAMES: &[&str] = &["Alice", "Bob", "Charlie", "Dana", "Erin", "Mona"];
    pub const LAST_NAMES: &[&str] = &["Smith", "Lisa", "O'Hara", "van Dyke", "Nguyen"];
    pub const LOGINS: &[&str] = &["alice", "bob", "charlie", "dev", "maintainer", "reviewer"];
    pub const DOMAINS: &[&str] = &["example.com", "example.org", "users.noreply.example"];
    pub const MALFORMED: &[&str] = &["not a maintainer", "missing <bracket", "two words"];
}

/// Layout distribution weights (percent); the remainder is login/email.
const WEIGHT_BARE: u32 = 30;
const WEIGHT_FULL: u32 = 40;

/// Generates random maintainers based on configuration.
pub fn generate_maintainers(config: &GeneratorConfig) -> Vec<Maintainer> {
    use vocabulary::*;

    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut maintainers = Vec::with_capacity(config.num_maintainers);

    for idx in 0..config.num_maintainers {
        let login = format!("{}{}", LOGINS[rng.random_range(0..LOGINS.len())], idx);
        let roll = rng.random_range(0..100);

        let maintainer = if roll < WEIGHT_BARE {
            Maintainer::from_login(login)
        } else {
            let email = format!("{}@{}", login, DOMAINS[rng.random_range(0..DOMAINS.len())]);
            let maintainer = Maintainer::from_login(login).with_email(email);
            if roll < WEIGHT_BARE + WEIGHT_FULL {
                let name = format!(
                    "{} {}",
                    FIRST_NAMES[rng.random_range(0..FIRST_NAMES.len())],
                    LAST_NAMES[rng.random_range(0..LAST_NAMES.len())]
                );
                maintainer.with_name(name)
            } else {
                maintainer
            }
        };
        maintainers.push(maintainer);
    }

    maintainers
}

/// Renders a maintainer in the MAINTAINERS line layout matching its fields.
///
/// Returns `None` for a maintainer without a login.
pub fn render_line(maintainer: &Maintainer) -> Option<String> {
    let login = maintainer.login()?;
    Some(match (maintainer.name(), maintainer.email()) {
        (Some(name), Some(email)) => format!("{} <{}> (@{})", name, email, login),
        (None, Some(email)) => format!("{} <{}>", login, email),
        _ => login.to_string(),
    })
}

/// Generates a MAINTAINERS file as a string.
pub fn generate(config: &GeneratorConfig) -> String {
    use vocabulary::MALFORMED;

    let maintainers = generate_maintainers(config);
    let mut lines: Vec<String> = maintainers.iter().filter_map(render_line).collect();

    if config.num_malformed > 0 {
        let mut rng = StdRng::seed_from_u64(config.seed.wrapping_add(1));
        for _ in 0..config.num_malformed {
            let at = rng.random_range(0..=lines.len());
            let text = MALFORMED[rng.random_range(0..MALFORMED.len())];
            lines.insert(at, text.to_string());
        }
    }

    let mut content = lines.join("\n");
    if !content.is_empty() {
        content.push('\n');
    }
    content
}
