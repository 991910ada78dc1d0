use tracing::{debug, trace};

use super::{options::SearchOptions, tracker::BestTracker};
use crate::{
    candidate::Candidate,
    crossover::uniform_crossover,
    error::{Result, SearchError},
    local_search::LocalSearch,
    objective::Objective,
    population::Population,
    rng::RandomNumberGenerator,
    stop::StopCondition,
};

/// Represents the result of a partition run: the best candidate observed and
/// the run's counters.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PartitionOutcome {
    /// The best candidate observed during the run, initialization included.
    pub best: Candidate,
    /// The fitness of the best candidate.
    pub best_fitness: f64,
    /// The number of accepted steady-state replacements.
    pub generations: u64,
    /// The number of evaluate-refine cycles the run performed.
    pub evaluations: u64,
}

/// The search driver: couples an objective with a refinement procedure and
/// runs partition searches over them.
#[derive(Debug, Clone)]
pub struct GeneticLocalSearch<O, L>
where
    O: Objective,
    L: LocalSearch<O>,
{
    objective: O,
    local_search: L,
}

impl<O, L> GeneticLocalSearch<O, L>
where
    O: Objective,
    L: LocalSearch<O>,
{
    /// Creates a new `GeneticLocalSearch` instance with the specified
    /// objective and local search.
    ///
    /// # Arguments
    ///
    /// * `objective` - The objective that scores candidates. Lower is better.
    /// * `local_search` - The refinement applied to every generated candidate.
    pub fn new(objective: O, local_search: L) -> Self {
        Self {
            objective,
            local_search,
        }
    }

    /// Returns the objective.
    pub fn objective(&self) -> &O {
        &self.objective
    }

    /// Searches for a good bipartition until the stop condition fires.
    ///
    /// The run first fills the population with distinct, locally refined
    /// random candidates, then repeats the steady-state step: pick two
    /// distinct parents uniformly at random, cross them, refine the child,
    /// and let it replace the worst member if it is strictly better and not
    /// a duplicate. The stop condition is polled once per iteration, before
    /// a child is generated, and is the only way the loop ends.
    ///
    /// # Arguments
    ///
    /// * `options` - Search options controlling population size and the
    ///   initialization attempt budget.
    /// * `stop` - The stop condition; polled once per iteration.
    /// * `rng` - A random number generator for introducing randomness.
    ///
    /// # Returns
    ///
    /// A `Result` containing the best candidate observed during the run and
    /// the run's counters, or a `SearchError` if the run fails.
    ///
    /// # Errors
    ///
    /// This method will return an error if:
    /// - The options fail validation
    /// - The objective reports a zero assignment length
    /// - The objective produces a non-finite fitness
    /// - Initialization exhausts its attempt budget before filling the
    ///   population with distinct candidates
    pub fn partition<S>(
        &self,
        options: &SearchOptions,
        stop: &mut S,
        rng: &mut RandomNumberGenerator,
    ) -> Result<PartitionOutcome>
    where
        S: StopCondition,
    {
        options.validate()?;
        if self.objective.assignment_len() == 0 {
            return Err(SearchError::Configuration(
                "Objective must have a positive assignment length".to_string(),
            ));
        }

        let mut tracker = BestTracker::new();
        let mut population = self.initialize(options, &mut tracker, rng)?;

        while !stop.should_stop() {
            let mut child = self.breed(&population, rng)?;
            self.evaluate_and_refine(&mut child, rng)?;
            tracker.observe(&child)?;

            if population.contains(&child) {
                trace!(%child, "duplicate child discarded");
                continue;
            }

            if population.try_replace_worst(child)? {
                trace!(
                    generation = population.generations(),
                    best_fitness = ?tracker.best_fitness(),
                    "child replaced the worst member"
                );
            }
        }

        let generations = population.generations();
        let evaluations = tracker.observed();
        let best = tracker.into_best().ok_or(SearchError::EmptyPopulation)?;
        let best_fitness = best.fitness().ok_or_else(|| {
            SearchError::MissingFitness("Tracked best candidate has no fitness".to_string())
        })?;

        debug!(generations, evaluations, best_fitness, "search finished");

        Ok(PartitionOutcome {
            best,
            best_fitness,
            generations,
            evaluations,
        })
    }

    /// Fills a fresh population with distinct, evaluated, locally refined
    /// random candidates. Every draw counts against the attempt budget,
    /// whether or not it survives duplicate screening.
    fn initialize(
        &self,
        options: &SearchOptions,
        tracker: &mut BestTracker,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Population> {
        let target = options.population_size();
        let mut population = Population::with_capacity(target)?;
        let mut attempts = 0;

        while !population.is_full() {
            if attempts >= options.max_init_attempts() {
                return Err(SearchError::InitializationStalled {
                    attempts,
                    reached: population.len(),
                    target,
                });
            }
            attempts += 1;

            let mut candidate = Candidate::random(self.objective.assignment_len(), rng);
            self.evaluate_and_refine(&mut candidate, rng)?;
            tracker.observe(&candidate)?;

            if population.contains(&candidate) {
                trace!(attempts, "duplicate initial candidate discarded");
                continue;
            }
            population.push(candidate)?;
        }

        debug!(
            attempts,
            target,
            best_fitness = ?tracker.best_fitness(),
            "population initialized"
        );
        Ok(population)
    }

    /// Generates a child from two distinct parents drawn uniformly at
    /// random from the population.
    fn breed(&self, population: &Population, rng: &mut RandomNumberGenerator) -> Result<Candidate> {
        let members = population.members();
        debug_assert!(members.len() >= 2);

        let index1 = rng.fetch_index(members.len());
        // The second draw covers one slot fewer and skips past index1, so
        // the pair is always distinct and uniform over non-self pairs.
        let mut index2 = rng.fetch_index(members.len() - 1);
        if index2 >= index1 {
            index2 += 1;
        }

        uniform_crossover(&members[index1], &members[index2], rng)
    }

    /// Scores a candidate and hands it to the local search. The fitness is
    /// checked for finiteness on both sides of the refinement.
    fn evaluate_and_refine(
        &self,
        candidate: &mut Candidate,
        rng: &mut RandomNumberGenerator,
    ) -> Result<()> {
        let fitness = self.objective.evaluate(candidate.bits());
        if !fitness.is_finite() {
            return Err(SearchError::NonFiniteFitness(fitness));
        }
        candidate.set_fitness(fitness);

        self.local_search.refine(candidate, &self.objective, rng);

        match candidate.fitness() {
            Some(refined) if refined.is_finite() => Ok(()),
            Some(refined) => Err(SearchError::NonFiniteFitness(refined)),
            None => Err(SearchError::MissingFitness(
                "Local search left the candidate unevaluated".to_string(),
            )),
        }
    }
}
