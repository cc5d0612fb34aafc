// Parametric L-system demo: expand an axiom and execute it against a
// text-mode turtle.

use parametric_lsystem::{Consumer, LSystem, LsystemError};

/// Saved turtle state for push/pop.
#[derive(Debug, Clone, Copy)]
struct TurtleState {
    x: f64,
    y: f64,
    /// Heading in degrees, 0 = up, clockwise positive.
    heading: f64,
}

/// Text-mode turtle: prints every command it executes, indented by the
/// current stack depth.
struct Turtle {
    state: TurtleState,
    stack: Vec<TurtleState>,
}

impl Turtle {
    fn new() -> Self {
        Self {
            state: TurtleState {
                x: 0.0,
                y: 0.0,
                heading: 0.0,
            },
            stack: Vec::new(),
        }
    }

    fn say(&self, message: &str) {
        println!("{}{}", "  ".repeat(self.stack.len()), message);
    }

    fn forward(&mut self, distance: f64) {
        let radians = self.state.heading.to_radians();
        self.state.x += radians.sin() * distance;
        self.state.y += radians.cos() * distance;
        self.say(&format!(
            "forward {} -> ({:.2}, {:.2})",
            distance, self.state.x, self.state.y
        ));
    }

    fn turn(&mut self, degrees: f64) {
        self.state.heading = (self.state.heading + degrees).rem_euclid(360.0);
        self.say(&format!("turn {} -> {}", degrees, self.state.heading));
    }
}

impl Consumer for Turtle {
    fn on_push(&mut self) {
        self.say("push");
        self.stack.push(self.state);
    }

    fn on_pop(&mut self) {
        if let Some(saved) = self.stack.pop() {
            self.state = saved;
        }
        self.say("pop");
    }
}

fn first_arg(args: &[String]) -> f64 {
    args.first().and_then(|a| a.parse().ok()).unwrap_or(1.0)
}

/// Register the demo grammar: forward/left/right moves, two joint-style
/// markers, and a recursive `Crazy` rule that branches, repeats, and
/// terminates through its condition.
fn build_system() -> Result<LSystem<Turtle>, LsystemError> {
    let mut sys: LSystem<Turtle> = LSystem::new();

    sys.add_rule("F<x>", |t: &mut Turtle, args: &[String]| {
        t.forward(first_arg(args));
    })?;
    sys.add_rule("L<x>", |t: &mut Turtle, args: &[String]| {
        t.turn(-90.0 * first_arg(args));
    })?;
    sys.add_rule("R<x>", |t: &mut Turtle, args: &[String]| {
        t.turn(90.0 * first_arg(args));
    })?;
    sys.add_rule("Rev<x>", |t: &mut Turtle, _: &[String]| {
        t.say("revolute joint");
    })?;
    sys.add_rule("Twist<x>", |t: &mut Turtle, _: &[String]| {
        t.say("twist joint");
    })?;
    sys.add_rule("Crazy<x>", |_: &mut Turtle, _: &[String]| {})?
        .with_branch("x>0", "L<x>[Crazy<x-1>{F<x>}(x)Twist<x>]R<x>[Crazy<x-1>{F<x>}(x)Rev<x>]")
        .with_fallback("F<1>");

    Ok(sys)
}

fn main() {
    tracing_subscriber::fmt::init();

    let args: Vec<String> = std::env::args().collect();
    let program_name = args.first().map(|s| s.as_str()).unwrap_or("lsystem");

    if args.iter().any(|a| a == "-h" || a == "--help") {
        eprintln!("Usage: {} [axiom] [iterations]", program_name);
        eprintln!();
        eprintln!("Examples:");
        eprintln!("  {} \"Crazy<2>\" 3", program_name);
        eprintln!("  {} \"[L<1>F<1>][R<1>F<1>]{{F<1>}}(2)\" 0", program_name);
        std::process::exit(0);
    }

    let axiom = args.get(1).map(String::as_str).unwrap_or("Crazy<2>");
    let iterations: u32 = match args.get(2).map(String::as_str).unwrap_or("3").parse() {
        Ok(n) => n,
        Err(_) => {
            eprintln!("Error: iterations must be a non-negative integer");
            std::process::exit(1);
        }
    };

    let sys = match build_system() {
        Ok(sys) => sys,
        Err(e) => {
            eprintln!("Grammar error: {}", e);
            std::process::exit(1);
        }
    };

    let expanded = match sys.expand(axiom, iterations) {
        Ok(expanded) => expanded,
        Err(e) => {
            eprintln!("Expansion error: {}", e);
            std::process::exit(1);
        }
    };
    println!("expanded: {}", expanded);
    println!();

    let mut turtle = Turtle::new();
    if let Err(e) = sys.execute(&expanded, &mut turtle) {
        eprintln!("Execution error: {}", e);
        std::process::exit(1);
    }
}
