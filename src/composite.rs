use crate::affinity::AffinityMatrix;
use crate::ranking::*;
use crate::ranking_context::RankingContext;
use crate::util::mean_rows;

pub fn mean_of(vectors: &[&RankVector]) -> RankVector {
    let rows: Vec<_> = vectors.iter().map(|v| v.scores()).collect();
    RankVector::from_scores(mean_rows(&rows))
}

// ((unified + split) / 2 + defensive) / 2
pub fn overall_with_split(defensive: &RankVector, split_offensive: &RankVector, unified_offensive: &RankVector) -> RankVector {
    let offensive = mean_of(&[unified_offensive, split_offensive]);
    mean_of(&[&offensive, defensive])
}

pub fn overall_without_split(defensive: &RankVector, unified_offensive: &RankVector) -> RankVector {
    mean_of(&[unified_offensive, defensive])
}

/// All six rankings from one matrix, in the order they are reported.
#[derive(Debug, Clone)]
pub struct RankingReport {
    pub defensive: RankVector,
    pub split_offensive: RankVector,
    pub unified_offensive: RankVector,
    pub overall_with_split: RankVector,
    pub overall_without_split: RankVector,
    pub markov: RankVector,
}

impl RankingReport {
    pub fn compute(matrix: &AffinityMatrix, ranking_context: &RankingContext) -> Self {
        let defensive = Engine::Defensive.run(matrix, ranking_context);
        let split_offensive = Engine::SplitOffensive.run(matrix, ranking_context);
        let unified_offensive = Engine::UnifiedOffensive.run(matrix, ranking_context);
        let markov = Engine::Markov.run(matrix, ranking_context);

        Self {
            overall_with_split: overall_with_split(&defensive, &split_offensive, &unified_offensive),
            overall_without_split: overall_without_split(&defensive, &unified_offensive),
            defensive,
            split_offensive,
            unified_offensive,
            markov,
        }
    }

    pub fn sections(&self) -> [(&'static str, &RankVector); 6] {
        [
            (Engine::Defensive.title(), &self.defensive),
            (Engine::SplitOffensive.title(), &self.split_offensive),
            (Engine::UnifiedOffensive.title(), &self.unified_offensive),
            ("Overall rankings with split", &self.overall_with_split),
            ("Overall rankings without split", &self.overall_without_split),
            (Engine::Markov.title(), &self.markov),
        ]
    }
}
