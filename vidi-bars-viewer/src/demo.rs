//! Built-in data sets for trying the chart without a file

use vidi_bars::model::{BarDatum, Color};

use crate::config::Demo;

const DAYS: [(&str, &str, f32); 7] = [
    ("Mon", "Monday", 6.5),
    ("Tue", "Tuesday", 7.2),
    ("Wed", "Wednesday", 5.8),
    ("Thu", "Thursday", 8.1),
    ("Fri", "Friday", 6.9),
    ("Sat", "Saturday", 9.4),
    ("Sun", "Sunday", 8.7),
];

const MONTHS: [(&str, &str); 12] = [
    ("Jan", "January"),
    ("Feb", "February"),
    ("Mar", "March"),
    ("Apr", "April"),
    ("May", "May"),
    ("Jun", "June"),
    ("Jul", "July"),
    ("Aug", "August"),
    ("Sep", "September"),
    ("Oct", "October"),
    ("Nov", "November"),
    ("Dec", "December"),
];

pub fn data(demo: Demo) -> Vec<BarDatum> {
    match demo {
        Demo::Weekly => DAYS
            .iter()
            .map(|(label, full, hours)| BarDatum::new(*hours, *label).full_label(*full))
            .collect(),
        Demo::Monthly => MONTHS
            .iter()
            .enumerate()
            .map(|(i, (label, full))| {
                // Seasonal curve peaking mid-year
                let phase = (i as f32 / 11.0) * std::f32::consts::PI;
                let value = 120.0 + 380.0 * phase.sin();
                let datum = BarDatum::new(value.round(), *label).full_label(*full);
                if i == 6 {
                    datum.colors(Color::rgb(1.0, 0.72, 0.35), Color::rgb(0.92, 0.42, 0.18))
                } else {
                    datum
                }
            })
            .collect(),
        Demo::Empty => vec![],
    }
}
