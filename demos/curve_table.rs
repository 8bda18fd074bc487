use anyhow::Result;
use motion_curves::{Curve, CurveRecipe};

const FRAMES: usize = 11;

fn print_row(label: &str, curve: &Curve) {
    print!("{label:>22} ");
    for value in curve.bake(FRAMES) {
        print!("{value:7.3} ");
    }
    println!();
}

fn main() -> Result<()> {
    print!("{:>22} ", "t");
    for i in 0..FRAMES {
        print!("{:7.3} ", i as f64 / (FRAMES - 1) as f64);
    }
    println!("\n");

    // Example 1: Easings
    let linear = Curve::new();
    print_row("linear", &linear);
    print_row("ease", &linear.ease());
    print_row("ease_out_expo", &linear.ease_out_expo());
    print_row("ease_out_quad", &linear.ease_out_quad());
    print_row("ease_in_expo", &linear.ease_in_expo());
    println!();

    // Example 2: Timing transforms
    print_row("bounce(0.2, 0.2)", &linear.bounce_with(0.2, 0.2));
    print_row("loop(2)", &linear.repeat(2.0));
    print_row("offset(0.25)", &linear.offset(0.25));
    print_row("shrink(0.5)", &linear.shrink(0.5));
    print_row("reverse", &linear.reverse());
    println!();

    // Example 3: A blink that fades with an eased envelope
    let envelope = linear.ease().reverse();
    let blink = linear.bounce_with(0.1, 0.1).repeat(3.0).multiply(&envelope);
    print_row("blink * envelope", &blink);
    println!();

    // Example 4: Wiggle from a recipe given on the command line
    let text = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "wiggle(5) | map_range(-15, 15)".to_string());
    let recipe: CurveRecipe = text.parse()?;
    let curve = recipe.build_seeded(2024)?;
    print_row(&text, &curve);

    Ok(())
}
