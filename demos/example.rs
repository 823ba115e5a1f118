use clags::{CommandLineParser, List, Nargs, Parameter, Scalar, Switch};

#[derive(Debug)]
enum Algorithm {
    Fifo,
    Lifo,
}

fn main() {
    let mut input_file: String = String::default();
    let mut algorithms: Vec<Algorithm> = Vec::default();
    let mut output_file: Option<String> = None;
    let mut quality: Option<u8> = None;
    let mut warnings: bool = false;
    let mut help: bool = false;

    let parser = CommandLineParser::new("example")
        .about("Process the input file with each algorithm, in order.")
        .add(Parameter::positional(
            Scalar::new(&mut input_file),
            "input_file",
            "The input file.",
        ))
        .add(Parameter::positional_list(
            List::custom(&mut algorithms, Nargs::AtLeastOne, |_, token| match token {
                "FIFO" => Ok(Algorithm::Fifo),
                "LIFO" => Ok(Algorithm::Lifo),
                _ => Err("expected FIFO or LIFO".to_string()),
            }),
            "algorithm",
            "The algorithms to use.",
        ))
        .add(Parameter::valued_flag(
            Scalar::new(&mut output_file),
            Some('o'),
            Some("output"),
            "FILE",
            "The output file.",
        ))
        .add(Parameter::valued_flag(
            Scalar::new(&mut quality),
            Some('q'),
            Some("quality"),
            "LEVEL",
            "The sample quality.",
        ))
        .add(Parameter::switch(
            Switch::new(&mut warnings),
            Some('w'),
            None,
            "Print warnings.",
            false,
        ))
        .add(Parameter::help_switch(&mut help))
        .build();
    let usage = parser.usage();

    if !parser.parse() {
        usage.print();
        std::process::exit(1);
    }

    if help {
        usage.print();
        return;
    }

    println!(
        "input: {input_file}, output: {output_file:?}, quality: {quality:?}, warnings: {warnings}"
    );
    println!("algorithms: {algorithms:?}");
}
