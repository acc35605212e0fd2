//! # Streamline CLI Application
//!
//! Terminal-based pipe flow calculator. Prompts for fluid properties and
//! pipe geometry, runs the flow_core pipeline, and prints the results as
//! both a plain report and JSON.

use std::io::{self, BufRead, Write};
use std::process;

use crossterm::style::Stylize;
use flow_core::materials::PipeMaterial;
use flow_core::{calculate, CalcError, PipeFlowInput};

/// Read one trimmed line from stdin; `None` means the stream is closed.
fn read_line() -> Option<String> {
    let mut input = String::new();
    match io::stdin().lock().read_line(&mut input) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(input.trim().to_string()),
    }
}

fn invalid_input_notice() {
    println!("{}", "Please enter a valid input!".red());
}

/// Prompt until the user enters a positive number. Exits if stdin closes.
fn prompt_positive(message: &str) -> f64 {
    loop {
        print!("{message}");
        let _ = io::stdout().flush();
        let Some(line) = read_line() else {
            process::exit(1);
        };
        match line.parse::<f64>() {
            Ok(value) if value > 0.0 && value.is_finite() => return value,
            _ => invalid_input_notice(),
        }
    }
}

/// Prompt until the user enters a non-negative number. Exits if stdin closes.
fn prompt_non_negative(message: &str) -> f64 {
    loop {
        print!("{message}");
        let _ = io::stdout().flush();
        let Some(line) = read_line() else {
            process::exit(1);
        };
        match line.parse::<f64>() {
            Ok(value) if value >= 0.0 && value.is_finite() => return value,
            _ => invalid_input_notice(),
        }
    }
}

/// Show the material catalog and return the roughness to use.
fn prompt_roughness() -> f64 {
    println!();
    println!("Pipe material:");
    for (position, material) in PipeMaterial::ALL.iter().enumerate() {
        println!(
            "{:>3}. {:<30} {:>7.1e} m",
            position + 1,
            material.display_name(),
            material.roughness_m()
        );
    }
    println!("  0. Custom roughness");

    loop {
        print!("Select material [0-{}]: ", PipeMaterial::ALL.len());
        let _ = io::stdout().flush();
        let Some(line) = read_line() else {
            process::exit(1);
        };
        match line.parse::<usize>() {
            Ok(0) => return prompt_non_negative("Roughness of the pipe (m): "),
            Ok(selection) => match PipeMaterial::from_index(selection) {
                Ok(material) => {
                    println!("Using {} ({:.1e} m)", material, material.roughness_m());
                    return material.roughness_m();
                }
                Err(_) => invalid_input_notice(),
            },
            Err(_) => invalid_input_notice(),
        }
    }
}

fn main() {
    println!("═══════════════════════════════════════════════");
    println!("  STREAMLINE - Pipe Flow Calculator");
    println!("═══════════════════════════════════════════════");
    println!();

    let density_kg_per_m3 = prompt_positive("Density (kg/m^3): ");
    let viscosity_pa_s = prompt_positive("Viscosity (Pa.S): ");
    let flow_rate_m3_per_s = prompt_positive("Volumetric Flow Rate (m^3 / s): ");
    let diameter_m = prompt_positive("Diameter (m): ");
    let length_m = prompt_positive("Length of the pipe (m): ");
    let roughness_m = prompt_roughness();

    let input = PipeFlowInput {
        label: "P-1".to_string(),
        density_kg_per_m3,
        viscosity_pa_s,
        flow_rate_m3_per_s,
        diameter_m,
        length_m,
        roughness_m,
    };

    println!();
    match calculate(&input) {
        Ok(result) => {
            println!("═══════════════════════════════════════════════");
            println!("  PIPE FLOW RESULTS");
            println!("═══════════════════════════════════════════════");
            println!();
            println!("Input:");
            println!(
                "  Flow rate: {:.4} m^3/s ({:.1} m^3/h)",
                input.flow_rate_m3_per_s,
                input.flow_rate_m3_per_h().value()
            );
            println!("  Diameter:  {:.4} m", input.diameter_m);
            println!("  Length:    {:.4} m", input.length_m);
            println!(
                "  Roughness: {:.1e} m (e/D = {:.1e})",
                input.roughness_m,
                input.relative_roughness()
            );
            println!();
            println!("Results:");
            println!("  Velocity:        {:.4} m/s", result.velocity_m_per_s);
            println!("  Reynolds number: {:.4}", result.reynolds_number);
            println!("  Flow regime:     {}", result.regime);
            println!("  Friction factor: {:.4}", result.friction_factor);
            if let (Some(laminar), Some(turbulent)) =
                (result.laminar_component, result.turbulent_component)
            {
                println!("    laminar estimate:   {:.4}", laminar);
                println!("    turbulent estimate: {:.4}", turbulent);
            }
            println!(
                "  Pressure drop:   {:.4} Pa ({:.4} kPa)",
                result.pressure_drop_pa,
                result.pressure_drop_kpa().value()
            );
            println!();
            println!(
                "The flow regime in the pipe is {} based on calculated Reynolds number \
                 ({:.4}) and also based on friction factor ({:.4}), the pressure drop \
                 is roughly {:.4}kPa.",
                result.regime,
                result.reynolds_number,
                result.friction_factor,
                result.pressure_drop_kpa().value()
            );

            println!();
            println!("JSON Output (for LLM/API use):");
            if let Ok(json) = serde_json::to_string_pretty(&result) {
                println!("{}", json);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            if let CalcError::ConvergenceFailed { .. } = e {
                eprintln!("The friction factor solve did not find a root. Check that the");
                eprintln!("inputs describe a realistic pipe and try again.");
            }
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
            process::exit(1);
        }
    }
}
