use crate::compute_summary;

/// Skriv én sammendragslinje per pakke til stdout.
/// Ugyldige pakker hoppes over med en warning – driveren
/// bestemmer selv om den heller vil avbryte.
pub fn print_summary_report(packets: &[(&str, Vec<f64>)]) {
    for (code, data) in packets {
        match compute_summary(code, data) {
            Ok(line) => println!("{}", line),
            Err(e) => log::warn!("hopper over pakke {:?}: {}", code, e),
        }
    }
}
