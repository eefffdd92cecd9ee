use ndarray::Array2;
use ndarray_rand::rand_distr::Normal;
use ndarray_rand::RandomExt;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::EnvFilter;
use unsupervised::input::matrix_from_rows;
use unsupervised::metrics::{reconstruction_error, reconstruction_mse};
use unsupervised::{Matrix, SVD};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Low-Rank Approximation with SVD ===\n");

    // Rank-2 signal plus a little noise
    let mut rng = StdRng::seed_from_u64(42);
    let left = Array2::random_using((10, 2), Normal::new(0.0, 1.0)?, &mut rng);
    let right = Array2::random_using((2, 8), Normal::new(0.0, 1.0)?, &mut rng);
    let noise = Array2::random_using((10, 8), Normal::new(0.0, 0.05)?, &mut rng);
    let x: Matrix = left.dot(&right) + noise;

    println!("Original data shape: {} rows, {} columns\n", x.nrows(), x.ncols());

    let mut svd = SVD::new();
    svd.fit(&x)?;

    if let Some(sigma) = svd.singular_values() {
        println!("Singular values: {:.4}", sigma);
    }
    if let Some(ratio) = svd.explained_variance_ratio() {
        println!("Explained variance ratio: {:.4}\n", ratio);
    }

    println!("{:<12} {:>20} {:>20}", "Components", "Frobenius error", "Reconstruction MSE");
    println!("{}", "-".repeat(54));

    let available = svd.n_singular_values().unwrap_or(0);
    for n_components in 1..=available {
        svd.set_n_components(Some(n_components))?;
        let approximation = svd.transform()?;

        println!(
            "{:<12} {:>20.6} {:>20.8}",
            n_components,
            reconstruction_error(&x, &approximation)?,
            reconstruction_mse(&x, &approximation)?
        );
    }

    println!("\n=== Rank-1 approximation of a 2x2 matrix ===");
    let small = matrix_from_rows(&[[4.0, 0.0], [3.0, -5.0]])?;
    let mut svd = SVD::new().n_components(1)?;
    let approximation = svd.fit_transform(&small)?;

    println!("Input:\n{}", small);
    println!("Rank-1 approximation:\n{:.4}", approximation);
    println!(
        "Error {:.6} equals the second singular value {:.6}",
        reconstruction_error(&small, &approximation)?,
        svd.singular_values().map(|s| s[1]).unwrap_or(f64::NAN)
    );

    println!("\n=== Rejected configurations ===");
    match SVD::with_n_components(Some(0)) {
        Ok(_) => println!("n_components=0 unexpectedly accepted"),
        Err(e) => println!("n_components=0: {}", e),
    }
    match SVD::new().transform() {
        Ok(_) => println!("transform before fit unexpectedly succeeded"),
        Err(e) => println!("transform before fit: {}", e),
    }

    Ok(())
}
