// Headless run of the demonstration: prints what the viewer would draw.
use binplot::{LabeledDataset, demo_figure, toy_dataset};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let data: LabeledDataset<f64> = toy_dataset();
    let (positives, negatives) = data.class_sizes();
    println!("binplot demo");
    println!(
        "toy dataset: {} points ({} labeled 1, {} labeled 0)",
        data.len(),
        positives,
        negatives
    );

    let fig = demo_figure()?;
    print!("{}", fig);
    Ok(())
}
