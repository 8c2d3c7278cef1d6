#![allow(non_snake_case)]
use RustedQuadrature::Examples::quadrature_examples::quadrature_examples;

fn main() {
    let example = 0;
    quadrature_examples(example);
}
