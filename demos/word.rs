//! Lowercase word chromosome scored by Levenshtein distance to a target.

use goga::ga::Chromosome;
use rand::Rng;
use std::fmt;

const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz";

/// Probability that a single letter is replaced during mutation.
const MUTATION_RATE: f64 = 0.2;

#[derive(Debug, Clone)]
pub struct Member {
    pub value: String,
    pub fitness: f64,
}

impl Member {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            fitness: 0.0,
        }
    }

    pub fn random<R: Rng>(len: usize, rng: &mut R) -> Self {
        Self::new(
            (0..len)
                .map(|_| random_letter(rng) as char)
                .collect::<String>(),
        )
    }
}

fn random_letter<R: Rng>(rng: &mut R) -> u8 {
    ALPHABET[rng.random_range(0..ALPHABET.len())]
}

impl fmt::Display for Member {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{} {}}}", self.fitness as i64, self.value)
    }
}

impl Chromosome for Member {
    type Offspring = String;

    fn fitness(&self) -> f64 {
        self.fitness
    }

    fn set_fitness(&mut self, fitness: f64) {
        self.fitness = fitness;
    }

    fn calculate_fitness(&mut self, target: &Self) {
        let edits = levenshtein(&self.value, &target.value);
        self.fitness = self.value.len() as f64 - edits as f64;
    }

    // Only an exact match scores the full length.
    fn is_good_enough(&self) -> bool {
        !self.value.is_empty() && self.fitness > self.value.len() as f64 - 1.0
    }

    fn mutate<R: Rng>(&mut self, rng: &mut R) {
        let mutated: String = self
            .value
            .chars()
            .map(|c| {
                if rng.random_bool(MUTATION_RATE) {
                    random_letter(rng) as char
                } else {
                    c
                }
            })
            .collect();
        self.value = mutated;
    }

    fn breed<R: Rng>(&self, other: &Self, rng: &mut R) -> (String, String) {
        let len = self.value.len().min(other.value.len());
        let site = if len == 0 { 0 } else { rng.random_range(0..len) };
        (
            format!("{}{}", &self.value[..site], &other.value[site..]),
            format!("{}{}", &other.value[..site], &self.value[site..]),
        )
    }
}

/// Edit distance between two ASCII strings.
pub fn levenshtein(s: &str, t: &str) -> usize {
    let (s, t) = (s.as_bytes(), t.as_bytes());
    let mut prev: Vec<usize> = (0..=t.len()).collect();
    let mut curr = vec![0; t.len() + 1];
    for i in 1..=s.len() {
        curr[0] = i;
        for j in 1..=t.len() {
            curr[j] = if s[i - 1] == t[j - 1] {
                prev[j - 1]
            } else {
                1 + prev[j].min(curr[j - 1]).min(prev[j - 1])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[t.len()]
}
