use afl::fuzz;
use nordic_validators::{account_number_check, Validator, ValidatorKind};
use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};
use strum::IntoEnumIterator;

#[cfg(not(feature = "manual_test"))]
fn main() {
    fuzz!(|data: &[u8]| {
        run_raw_fuzz(data);
    });
}

#[cfg(feature = "manual_test")]
fn main() {
    use std::io::{stdin, Read};

    let mut input = vec![];
    stdin().read_to_end(&mut input).unwrap();
    run_raw_fuzz(&input);
}

fn split_bytes_once(input: &[u8]) -> Option<(&[u8], &[u8])> {
    if let Some(i) = input.iter().position(|b| *b == b',') {
        Some((&input[0..i], &input[i + 1..]))
    } else {
        None
    }
}

fn run_raw_fuzz(bytes: &[u8]) -> Option<()> {
    let (input, rand_seed) = split_bytes_once(bytes)?;
    let input_str = std::str::from_utf8(input).ok()?;

    let mut rng_seed: u64 = 0;
    for i in 0..8 {
        if rand_seed.len() > i {
            rng_seed <<= 8;
            rng_seed += rand_seed[i] as u64;
        }
    }

    let rng = StdRng::seed_from_u64(rng_seed);
    run_fuzz(input_str, rng);

    Some(())
}

/// Inserts separators and stray characters the way people type identifiers
fn gen_noise(input: &str, rng: &mut StdRng) -> String {
    const NOISE: [char; 6] = ['-', '+', ' ', 'A', 'é', '０'];
    let mut noisy = String::with_capacity(input.len());
    for c in input.chars() {
        if rng.gen_bool(0.1) {
            noisy.push(*NOISE.choose(rng).unwrap());
        }
        noisy.push(c);
    }
    noisy
}

fn run_fuzz(input: &str, mut rng: StdRng) {
    let noisy_input = gen_noise(input, &mut rng);

    #[cfg(feature = "manual_test")]
    {
        println!("Input: {:?}", input);
        println!("Noisy input: {:?}", noisy_input);
    }

    for candidate in [input, noisy_input.as_str()] {
        for kind in ValidatorKind::iter() {
            let first = kind.is_valid_match(candidate);
            // validators are pure, asking twice must give the same answer
            assert_eq!(first, kind.is_valid_match(candidate));

            #[cfg(feature = "manual_test")]
            println!("{kind}: {first}");
        }

        if let Some(account) = account_number_check(candidate) {
            let digits: String = candidate.chars().filter(|c| c.is_ascii_digit()).collect();
            assert_eq!(format!("{}{}", account.clearing, account.number), digits);
        }
    }
}
