use monotone_cubic::MonotoneCubicSpline;

fn main() {
    tracing_subscriber::fmt().init();

    // step-like data, a natural cubic spline would overshoot both plateaus
    let x = vec![0.0, 1.0, 2.0, 2.5, 3.0, 4.0, 6.0];
    let y = vec![0.0, 0.0, 0.1, 2.0, 3.9, 4.0, 4.0];

    let spline = MonotoneCubicSpline::with_data(&x, &y).unwrap();

    let x_min = 0.0;
    let x_max = 6.0;
    let number_of_steps = 60;
    let step = (x_max - x_min) / number_of_steps as f64;

    println!("x;y;dy;d2y");
    for i in 0..=number_of_steps {
        let x = x_min + step * i as f64;
        println!(
            "{:.2};{:.4};{:.4};{:.4}",
            x,
            spline.sample(x),
            spline.sample_derivative(x),
            spline.sample_2nd_derivative(x)
        );
    }
}
