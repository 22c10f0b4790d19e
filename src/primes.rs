// 🔢 Primes - Trial division
// Standalone numeric utility, unrelated to the people queries

/// Whether `n` is prime.
///
/// Trial division by every `d` with `d * d <= n`. 0 and 1 are not prime.
pub fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }

    let mut divisor: u64 = 2;
    while divisor.checked_mul(divisor).map_or(false, |square| square <= n) {
        if n % divisor == 0 {
            return false;
        }
        divisor += 1;
    }

    true
}

/// All primes in `2..=limit`, ascending
pub fn primes_up_to(limit: u64) -> Vec<u64> {
    (2..=limit).filter(|&n| is_prime(n)).collect()
}
