// Copyright (c)  by Gleb E. Zaslavkiy
//MIT License
#![allow(non_snake_case)]

use crate::Utils::report::{save_rule_to_csv, save_rule_to_file};
use crate::quadrature::gauss_laguerre::LaguerreQuadrature;

pub fn quadrature_examples(example: usize) {
    match example {
        0 => {
            // the laziest way: the defaults reproduce the 32-point rule
            let mut quad = LaguerreQuadrature::new();
            quad.solve().unwrap();
            quad.print_rule();
        }

        1 => {
            // the classical 2-point rule, abscissas 2 -+ sqrt(2)
            let mut quad = LaguerreQuadrature::with_order(2);
            quad.loglevel = Some("warn".to_string());
            let rule = quad.solve().unwrap();
            println!("abscissas = {:?}", rule.abscissas.as_slice());
            println!("weights = {:?}", rule.weights.as_slice());
            println!("sum of weights = {}", rule.weights.sum());
        }

        2 => {
            // integrate x^2 e^(-x) over [0, inf) with a 10-point rule;
            // a narrower search interval with a finer grid works just as well
            let mut quad = LaguerreQuadrature::with_order(10);
            quad.set_search_interval(-1e-2, 40.0, 1000);
            quad.set_refinement(1e-10, 5000);
            quad.loglevel = Some("warn".to_string());
            let rule = quad.solve().unwrap();
            let integral = rule.integrate(|x| x * x);
            println!("integral of x^2 e^(-x) = {} (exact value 2)", integral);
            // the scaled weights integrate a bare integrand instead
            let scaled = rule.integrate_scaled(|x| x * x * (-x).exp());
            println!("same integral via scaled weights = {}", scaled);
        }

        3 => {
            // export a 16-point rule to text and CSV files
            let mut quad = LaguerreQuadrature::with_order(16);
            quad.loglevel = Some("off".to_string());
            let rule = quad.solve().unwrap();
            save_rule_to_file(&rule, "laguerre_16.txt").unwrap();
            save_rule_to_csv(&rule, "laguerre_16.csv").unwrap();
            println!("16-point rule saved to laguerre_16.txt and laguerre_16.csv");
        }

        _ => {
            println!("no such example");
        }
    }
}
