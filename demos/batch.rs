use std::env;

use monotone_cubic::MonotoneCubicSpline;

fn main() {
    tracing_subscriber::fmt().with_max_level(tracing::Level::DEBUG).init();

    let path = env::args().nth(1).unwrap_or_else(|| "samples.csv".to_string());

    let x_min = 0.0;
    let x_max = 6.0;

    let x = vec![x_min, 1.0, 2.0, 4.0, 5.0, x_max];
    let y = vec![1.0, 1.5, 3.0, 3.0, 7.0, 7.5];

    let spline = MonotoneCubicSpline::with_data(&x, &y).unwrap();

    let number_of_steps = 60;
    let step = (x_max - x_min) / number_of_steps as f64;
    let x_vector: Vec<f64> = (0..=number_of_steps).map(|i| x_min + step * i as f64).collect();

    if let Err(err) = spline.dump_csv(&path, &x_vector) {
        eprintln!("{}", err);
        std::process::exit(1);
    }
    println!("wrote {} rows to {}", x_vector.len(), path);
}
