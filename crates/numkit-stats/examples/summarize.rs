//! Summarize a small sample with every descriptive measure

use numkit_stats::{mean, median, min_max, mode, population_std_dev, sum_of_squares};

fn main() {
    let sample = [12.0, 15.0, 15.0, 17.0, 19.0, 19.0, 19.0, 22.0, 24.0];

    println!("sample: {:?}", sample);
    println!("mean:     {:.3}", mean(&sample));
    println!("median:   {:.3}", median(&sample));
    println!("mode:     {:?}", mode(&sample));
    println!("std dev:  {:.3}", population_std_dev(&sample));
    println!("sum sq:   {:.1}", sum_of_squares(&sample));

    match min_max(&sample) {
        Some(mm) => println!("range:    [{}, {}]", mm.min, mm.max),
        None => println!("range:    no data"),
    }
}
