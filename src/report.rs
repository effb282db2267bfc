use std::path::Path;
use serde::Serialize;
use crate::affinity::AffinityMatrix;
use crate::class::*;
use crate::composite::RankingReport;
use crate::error::RankingError;
use crate::ranking::RankVector;

// Highest score first. Equal scores keep class order, so Saber lists before Lancer on a tie.
pub fn ranked_order(rankings: &RankVector) -> Vec<(Class, f64)> {
    let mut order: Vec<(Class, f64)> = rankings.iter().collect();
    order.sort_by(|a, b| b.1.total_cmp(&a.1));
    order
}

pub fn print_grid(matrix: &AffinityMatrix) {
    // Attackers down the side, defenders along the top
    print!("a/d ");
    for class in Class::ALL {
        print!("{class} ");
    }
    println!();

    for attacker in Class::ALL {
        print!("{attacker}");
        for dmg in matrix.row(attacker) {
            print!("{dmg:4.1}");
        }
        println!();
    }
}

pub fn print_in_order(rankings: &RankVector, ranking_desc: &str) {
    println!("{ranking_desc}:");
    for (place, (class, score)) in ranked_order(rankings).into_iter().enumerate() {
        println!("Place #{}: {class}{score:8.5}", place + 1);
    }
}

#[derive(Debug, Serialize)]
struct RankingRow {
    class: &'static str,
    name: &'static str,
    defensive: f64,
    split_offensive: f64,
    unified_offensive: f64,
    overall_with_split: f64,
    overall_without_split: f64,
    markov: f64,
}

pub fn write_rankings_csv(file_path: &Path, report: &RankingReport) -> Result<(), RankingError> {
    let mut writer = csv::Writer::from_path(file_path)?;

    for class in Class::ALL {
        writer.serialize(RankingRow {
            class: class.name(),
            name: class.full_name(),
            defensive: report.defensive[class],
            split_offensive: report.split_offensive[class],
            unified_offensive: report.unified_offensive[class],
            overall_with_split: report.overall_with_split[class],
            overall_without_split: report.overall_without_split[class],
            markov: report.markov[class],
        })?;
    }

    writer.flush().map_err(|source| RankingError::Io { path: file_path.to_path_buf(), source })?;
    log::info!("Wrote rankings for {NUM_CLASSES} classes to {}", file_path.display());
    Ok(())
}

// Same layout as print_grid: header row of defenders, one row per attacker.
pub fn write_matrix_csv(file_path: &Path, matrix: &AffinityMatrix) -> Result<(), RankingError> {
    let mut writer = csv::Writer::from_path(file_path)?;

    let mut header = vec!["a/d".to_string()];
    header.extend(CLASS_NAMES.iter().map(|n| n.to_string()));
    writer.write_record(&header)?;

    for attacker in Class::ALL {
        let mut record = vec![attacker.name().to_string()];
        record.extend(matrix.row(attacker).iter().map(|dmg| dmg.to_string()));
        writer.write_record(&record)?;
    }

    writer.flush().map_err(|source| RankingError::Io { path: file_path.to_path_buf(), source })?;
    Ok(())
}
