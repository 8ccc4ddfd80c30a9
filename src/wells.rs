use qwell::{ grid::Grid, potential::Well, solve::solve };

// solve the five reference wells with the front-end's default parameters and
// print the lowest levels

const HALF_WIDTH: f64 = 10.0; // nm
const NPTS: usize = 300;
const MASS: f64 = 1.0; // electron masses
const LEVELS: usize = 3;

fn main() -> anyhow::Result<()> {
    let grid = Grid::symmetric(HALF_WIDTH, NPTS)?;
    let wells = [
        ("infinite well", Well::Infinite),
        ("finite well", Well::finite_defaults()),
        ("oscillator", Well::Oscillator),
        ("triangular well", Well::triangle_defaults()),
        ("tilted finite well", Well::triangle_finite_defaults()),
    ];
    for (name, well) in wells {
        let spectrum = solve(&grid, &well, MASS)?;
        println!("{name}:");
        for (k, sol) in spectrum.lowest(LEVELS).iter().enumerate() {
            println!("  E{} = {:.6} eV", k + 1, sol.e);
        }
    }
    Ok(())
}
