use std::fs;
use std::path::Path;
use crate::error::RankingError;
use crate::ranking_context::RankingContext;

// Loads a RankingContext from a JSON file. Fields that are missing keep their defaults,
// and numbers may be written as strings ("iterations": "2000").
pub fn load_context(file_path: &Path) -> Result<RankingContext, RankingError> {
    let data = fs::read_to_string(file_path).map_err(|source| RankingError::Io {
        path: file_path.to_path_buf(),
        source,
    })?;

    parse_context(&data)
}

pub fn parse_context(data: &str) -> Result<RankingContext, RankingError> {
    let ranking_context: RankingContext = serde_json::from_str(data)?;
    ranking_context.validate()?;

    log::debug!("Loaded ranking context {ranking_context:?}");
    Ok(ranking_context)
}

// Context for a run: the optional file, then the iteration override on top. A loaded file is
// validated by load_context, so it is only checked again when the override changes it.
pub fn resolve_context(config: Option<&Path>, iterations: Option<usize>) -> Result<RankingContext, RankingError> {
    let ranking_context = match (config, iterations) {
        (Some(path), None) => return load_context(path),
        (None, None) => return Ok(RankingContext::default()),
        (Some(path), Some(iterations)) => RankingContext { iterations, ..load_context(path)? },
        (None, Some(iterations)) => RankingContext::with_iterations(iterations),
    };

    ranking_context.validate()?;
    Ok(ranking_context)
}
