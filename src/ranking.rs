use std::fmt;
use std::ops::Index;
use crate::affinity::AffinityMatrix;
use crate::class::*;
use crate::ranking_context::RankingContext;
use crate::util::sum_vector;

const FULL_LINK: f64 = 1.0;
const HALF_LINK: f64 = 0.5;

/// Score per class. Every engine starts from [`RankVector::uniform`] and replaces the whole
/// vector once per iteration, so iteration k+1 only ever reads iteration k.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankVector {
    scores: [f64; NUM_CLASSES],
}

impl RankVector {
    pub fn uniform() -> Self {
        Self { scores: [1.0 / NUM_CLASSES as f64; NUM_CLASSES] }
    }

    pub fn from_scores(scores: [f64; NUM_CLASSES]) -> Self {
        Self { scores }
    }

    fn zeroed() -> Self {
        Self { scores: [0.0; NUM_CLASSES] }
    }

    pub fn get(&self, class: Class) -> f64 {
        self.scores[class.index()]
    }

    fn add(&mut self, class: Class, value: f64) {
        self.scores[class.index()] += value;
    }

    pub fn scores(&self) -> &[f64; NUM_CLASSES] {
        &self.scores
    }

    pub fn sum(&self) -> f64 {
        sum_vector(&self.scores)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Class, f64)> + '_ {
        Class::ALL.into_iter().map(|class| (class, self.get(class)))
    }
}

impl Index<Class> for RankVector {
    type Output = f64;

    fn index(&self, class: Class) -> &f64 {
        &self.scores[class.index()]
    }
}

impl fmt::Display for RankVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (class, score) in self.iter() {
            write!(f, "{class}{score:6.3}, ")?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Link {
    pub target: Class,
    pub weight: f64,    // 1.0 for a full link, 0.5 for a half link
}

/// Outbound links of every class for one link-based engine.
#[derive(Debug, Clone, PartialEq)]
pub struct LinkSets {
    links: [Vec<Link>; NUM_CLASSES],
}

impl LinkSets {
    fn empty() -> Self {
        Self { links: std::array::from_fn(|_| Vec::new()) }
    }

    fn push(&mut self, from: Class, target: Class, weight: f64) {
        self.links[from.index()].push(Link { target, weight });
    }

    pub fn of(&self, class: Class) -> &[Link] {
        &self.links[class.index()]
    }

    fn log(&self, title: &str) {
        if !log::log_enabled!(log::Level::Debug) { return; }

        for class in Class::ALL {
            let listed: Vec<String> = self.of(class).iter()
                .map(|l| if l.weight < FULL_LINK { format!("({})", l.target) } else { l.target.to_string() })
                .collect();
            log::debug!("{title} links {class}: {}", listed.join(", "));
        }
    }
}

// Defensive: A links to B when A is weak against B, so weakness votes flow to whatever beats you.
pub fn defensive_links(matrix: &AffinityMatrix) -> LinkSets {
    let mut links = LinkSets::empty();
    for atk in Class::ALL {
        for def in Class::ALL {
            if atk != def && matrix.damage(atk, def) < 1.0 {
                links.push(atk, def, FULL_LINK);
            }
        }
    }
    links
}

// Offensive links point from the defender to every attacker that hits it for extra damage.
pub fn unified_offensive_links(matrix: &AffinityMatrix) -> LinkSets {
    let mut links = LinkSets::empty();
    for atk in Class::ALL {
        for def in Class::ALL {
            if atk != def && matrix.damage(atk, def) > 1.0 {
                links.push(def, atk, FULL_LINK);
            }
        }
    }
    links
}

pub fn split_offensive_links(matrix: &AffinityMatrix, ranking_context: &RankingContext) -> LinkSets {
    let mut links = LinkSets::empty();
    for atk in Class::ALL {
        for def in Class::ALL {
            if atk == def { continue; }

            let dmg = matrix.damage(atk, def);
            if dmg > ranking_context.full_link_threshold {
                links.push(def, atk, FULL_LINK);
            } else if dmg > ranking_context.half_link_threshold {
                links.push(def, atk, HALF_LINK);
            }
        }
    }
    links
}

// One synchronous PageRank step. Damping goes evenly to the other classes, the rest is split
// into one slot per link. A half link passes on half its slot and hands the other half back.
// No links means the class keeps everything that wasn't damped.
fn propagate_step(ranks: &RankVector, links: &LinkSets, damping: f64) -> RankVector {
    let mut new_ranks = RankVector::zeroed();

    for node in Class::ALL {
        let mut value_left = ranks.get(node);
        let damping_loss = damping * value_left;
        let damping_share = damping_loss / (NUM_CLASSES - 1) as f64;
        for other in Class::ALL {
            if other != node {
                new_ranks.add(other, damping_share);
            }
        }
        value_left -= damping_loss;

        let my_links = links.of(node);
        if my_links.is_empty() {
            new_ranks.add(node, value_left);
            continue;
        }

        let slot = value_left / my_links.len() as f64;
        for link in my_links {
            new_ranks.add(link.target, slot * link.weight);
            if link.weight < FULL_LINK {
                new_ranks.add(node, slot * (FULL_LINK - link.weight));
            }
        }
    }

    new_ranks
}

// Runs `step` for the configured number of iterations, handing every intermediate vector to `observe`.
fn iterate<S, O>(start: RankVector, iterations: usize, mut step: S, mut observe: O) -> RankVector where
    S: FnMut(&RankVector) -> RankVector,
    O: FnMut(usize, &RankVector) {
    let mut class_ranks = start;
    for iteration in 0..iterations {
        class_ranks = step(&class_ranks);
        observe(iteration, &class_ranks);
    }
    class_ranks
}

pub fn propagate_from<O>(start: RankVector, links: &LinkSets, ranking_context: &RankingContext, observe: O) -> RankVector where
    O: FnMut(usize, &RankVector) {
    iterate(
        start,
        ranking_context.iterations,
        |ranks| propagate_step(ranks, links, ranking_context.damping),
        observe,
    )
}

pub fn defensive_rank(matrix: &AffinityMatrix, ranking_context: &RankingContext) -> RankVector {
    defensive_rank_with(matrix, ranking_context, |_, _| {})
}

pub fn defensive_rank_with<O>(matrix: &AffinityMatrix, ranking_context: &RankingContext, observe: O) -> RankVector where
    O: FnMut(usize, &RankVector) {
    let links = defensive_links(matrix);
    links.log("Defensive");
    propagate_from(RankVector::uniform(), &links, ranking_context, observe)
}

pub fn split_offensive_rank(matrix: &AffinityMatrix, ranking_context: &RankingContext) -> RankVector {
    split_offensive_rank_with(matrix, ranking_context, |_, _| {})
}

pub fn split_offensive_rank_with<O>(matrix: &AffinityMatrix, ranking_context: &RankingContext, observe: O) -> RankVector where
    O: FnMut(usize, &RankVector) {
    let links = split_offensive_links(matrix, ranking_context);
    links.log("Split offensive");
    propagate_from(RankVector::uniform(), &links, ranking_context, observe)
}

pub fn unified_offensive_rank(matrix: &AffinityMatrix, ranking_context: &RankingContext) -> RankVector {
    unified_offensive_rank_with(matrix, ranking_context, |_, _| {})
}

pub fn unified_offensive_rank_with<O>(matrix: &AffinityMatrix, ranking_context: &RankingContext, observe: O) -> RankVector where
    O: FnMut(usize, &RankVector) {
    let links = unified_offensive_links(matrix);
    links.log("Unified offensive");
    propagate_from(RankVector::uniform(), &links, ranking_context, observe)
}

// Every giver splits its score into one portion per class (itself included). Each taker claims the
// share of a portion it threatens, and the remainder goes back to the giver. Not renormalised.
fn markov_step(ranks: &RankVector, matrix: &AffinityMatrix, max_damage: f64) -> RankVector {
    let mut new_ranks = RankVector::zeroed();

    for giver in Class::ALL {
        let portion = ranks.get(giver) / NUM_CLASSES as f64;

        for taker in Class::ALL {
            let threat = matrix.threat(taker, giver, max_damage);
            new_ranks.add(taker, threat * portion);
            new_ranks.add(giver, (1.0 - threat) * portion);
        }
    }

    new_ranks
}

pub fn markov_rank(matrix: &AffinityMatrix, ranking_context: &RankingContext) -> RankVector {
    markov_rank_with(matrix, ranking_context, |_, _| {})
}

pub fn markov_rank_with<O>(matrix: &AffinityMatrix, ranking_context: &RankingContext, mut observe: O) -> RankVector where
    O: FnMut(usize, &RankVector) {
    iterate(
        RankVector::uniform(),
        ranking_context.iterations,
        |ranks| markov_step(ranks, matrix, ranking_context.max_damage),
        |iteration, ranks| {
            log::trace!("Markov iteration {iteration}: {ranks}");
            observe(iteration, ranks);
        },
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Engine {
    Defensive,
    SplitOffensive,
    UnifiedOffensive,
    Markov,
}

impl Engine {
    pub fn title(self) -> &'static str {
        match self {
            Engine::Defensive => "Defensive rankings",
            Engine::SplitOffensive => "Split offensive rankings",
            Engine::UnifiedOffensive => "Unified offensive rankings",
            Engine::Markov => "Markovian ranking",
        }
    }

    pub fn run(self, matrix: &AffinityMatrix, ranking_context: &RankingContext) -> RankVector {
        let ranks = match self {
            Engine::Defensive => defensive_rank(matrix, ranking_context),
            Engine::SplitOffensive => split_offensive_rank(matrix, ranking_context),
            Engine::UnifiedOffensive => unified_offensive_rank(matrix, ranking_context),
            Engine::Markov => markov_rank(matrix, ranking_context),
        };
        log::info!("{} after {} iterations, total score {:.9}", self.title(), ranking_context.iterations, ranks.sum());
        ranks
    }
}
