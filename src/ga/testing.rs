//! Small chromosomes shared by the unit tests.

use super::types::Chromosome;
use rand::Rng;
use std::fmt;

/// A single real value scored by closeness to the target value.
///
/// Fitness is `100 - |value - target|`. Mutation adds a uniform step in
/// `[-step, step)`; a zero step makes mutation a no-op. Breeding swaps the
/// parents' values, so children equal the parents in reverse order.
#[derive(Debug, Clone, PartialEq)]
pub struct Scalar {
    pub id: usize,
    pub value: f64,
    pub step: f64,
    pub fitness: f64,
}

impl Scalar {
    pub fn new(value: f64) -> Self {
        Self {
            id: 0,
            value,
            step: 0.0,
            fitness: f64::NAN,
        }
    }

    pub fn with_fitness(fitness: f64) -> Self {
        Self {
            fitness,
            ..Self::new(0.0)
        }
    }

    pub fn tagged(id: usize, fitness: f64) -> Self {
        Self {
            id,
            ..Self::with_fitness(fitness)
        }
    }

    pub fn with_step(mut self, step: f64) -> Self {
        self.step = step;
        self
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{} {:.3}}}", self.fitness, self.value)
    }
}

impl Chromosome for Scalar {
    type Offspring = Scalar;

    fn fitness(&self) -> f64 {
        self.fitness
    }

    fn set_fitness(&mut self, fitness: f64) {
        self.fitness = fitness;
    }

    fn calculate_fitness(&mut self, target: &Self) {
        self.fitness = 100.0 - (self.value - target.value).abs();
    }

    fn is_good_enough(&self) -> bool {
        self.fitness > 99.5
    }

    fn mutate<R: Rng>(&mut self, rng: &mut R) {
        if self.step > 0.0 {
            self.value += rng.random_range(-self.step..self.step);
        }
    }

    fn breed<R: Rng>(&self, other: &Self, _rng: &mut R) -> (Scalar, Scalar) {
        let mut first = other.clone();
        let mut second = self.clone();
        first.fitness = f64::NAN;
        second.fitness = f64::NAN;
        (first, second)
    }
}

/// Lowercase word scored by the number of positions matching the target.
///
/// Offspring are bare strings, so the engine needs a real converter.
/// `learned` counts calls to the learning hook.
#[derive(Debug, Clone, PartialEq)]
pub struct Word {
    pub value: String,
    pub fitness: f64,
    pub learned: usize,
}

const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz";

impl Word {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            fitness: 0.0,
            learned: 0,
        }
    }

    pub fn random<R: Rng>(len: usize, rng: &mut R) -> Self {
        Self::new(
            (0..len)
                .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
                .collect::<String>(),
        )
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl Chromosome for Word {
    type Offspring = String;

    fn fitness(&self) -> f64 {
        self.fitness
    }

    fn set_fitness(&mut self, fitness: f64) {
        self.fitness = fitness;
    }

    fn calculate_fitness(&mut self, target: &Self) {
        self.fitness = matching_positions(&self.value, &target.value) as f64;
    }

    fn is_good_enough(&self) -> bool {
        !self.value.is_empty() && self.fitness >= self.value.len() as f64
    }

    // Replaces one random letter.
    fn mutate<R: Rng>(&mut self, rng: &mut R) {
        if self.value.is_empty() {
            return;
        }
        let at = rng.random_range(0..self.value.len());
        let letter = ALPHABET[rng.random_range(0..ALPHABET.len())] as char;
        self.value.replace_range(at..at + 1, letter.encode_utf8(&mut [0; 4]));
    }

    fn learn<R: Rng>(&mut self, _rng: &mut R) {
        self.learned += 1;
    }

    fn breed<R: Rng>(&self, other: &Self, rng: &mut R) -> (String, String) {
        let site = rng.random_range(0..=self.value.len().min(other.value.len()));
        (
            format!("{}{}", &self.value[..site], &other.value[site..]),
            format!("{}{}", &other.value[..site], &self.value[site..]),
        )
    }
}

fn matching_positions(s: &str, t: &str) -> usize {
    s.bytes().zip(t.bytes()).filter(|(a, b)| a == b).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matching_positions() {
        assert_eq!(matching_positions("renquinn", "renquinn"), 8);
        assert_eq!(matching_positions("rxnqxinn", "renquinn"), 6);
        assert_eq!(matching_positions("r", "renquinn"), 1);
        assert_eq!(matching_positions("", "abc"), 0);
    }

    #[test]
    fn test_only_exact_word_is_good_enough() {
        let target = Word::new("abcd");
        let mut exact = Word::new("abcd");
        let mut close = Word::new("abcx");
        exact.calculate_fitness(&target);
        close.calculate_fitness(&target);
        assert!(exact.is_good_enough());
        assert!(!close.is_good_enough());
    }
}
