use gf2_poly::{BinaryPolynomial, Gf2Error, DEFAULT_LIMBS};

use crate::error::FactorError;

/// Шестнадцатеричных цифр в слове
pub const WORD_DIGITS: usize = 8;
/// Шаг слов во входной строке: 8 цифр и разделитель
pub const WORD_STRIDE: usize = WORD_DIGITS + 1;

/// Разобранная задача: ширина S и упакованный полином из S/16 слов.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded<const LIMBS: usize = DEFAULT_LIMBS> {
    pub bit_width: usize,
    pub value: BinaryPolynomial<LIMBS>,
    /// Хотя бы одно входное слово было равно нулю
    pub has_zero_word: bool,
}

impl<const LIMBS: usize> Decoded<LIMBS> {
    /// Число слов во входной строке
    pub fn input_words(&self) -> usize {
        self.bit_width / 16
    }

    /// Число слов в записи одного множителя
    pub fn factor_words(&self) -> usize {
        self.bit_width / 32
    }
}

/// Разбор строки из S/16 слов, младшее слово первым.
/// Слово i прибавляется (XOR) к результату со сдвигом 32 * i.
pub fn decode<const LIMBS: usize>(
    bit_width: usize,
    line: &str,
) -> Result<Decoded<LIMBS>, FactorError> {
    if bit_width == 0 || bit_width % 32 != 0 {
        return Err(FactorError::MalformedInput(format!(
            "bit width {} is not a positive multiple of 32",
            bit_width
        )));
    }
    let required = bit_width.checked_mul(2).ok_or_else(|| {
        FactorError::MalformedInput(format!("bit width {} is too large", bit_width))
    })?;
    let capacity = BinaryPolynomial::<LIMBS>::CAPACITY;
    if required > capacity {
        return Err(Gf2Error::CapacityOverflow { required, capacity }.into());
    }

    let line = line.trim_end();
    let word_count = bit_width / 16;
    let expected_len = word_count
        .checked_mul(WORD_STRIDE)
        .map(|len| len - 1)
        .ok_or_else(|| {
            FactorError::MalformedInput(format!("{} words do not fit a line", word_count))
        })?;
    if line.len() != expected_len {
        return Err(FactorError::MalformedInput(format!(
            "expected {} words ({} characters), got {} characters",
            word_count,
            expected_len,
            line.len()
        )));
    }

    let mut value = BinaryPolynomial::zero();
    let mut has_zero_word = false;
    for i in 0..word_count {
        let start = i * WORD_STRIDE;
        let word = parse_word(line, start)?;
        if i + 1 < word_count && !line.as_bytes()[start + WORD_DIGITS].is_ascii_whitespace() {
            return Err(FactorError::MalformedInput(format!(
                "missing separator after word {}",
                i
            )));
        }

        if word == 0 {
            has_zero_word = true;
        }
        value += &BinaryPolynomial::from_u32(word).shl(i * 32)?;
    }

    Ok(Decoded {
        bit_width,
        value,
        has_zero_word,
    })
}

fn parse_word(line: &str, start: usize) -> Result<u32, FactorError> {
    let digits = line
        .get(start..start + WORD_DIGITS)
        .filter(|digits| digits.bytes().all(|b| b.is_ascii_hexdigit()))
        .ok_or_else(|| {
            FactorError::MalformedInput(format!("invalid hex word at offset {}", start))
        })?;
    u32::from_str_radix(digits, 16)
        .map_err(|err| FactorError::MalformedInput(format!("{} at offset {}", err, start)))
}

/// `words` 32-битных слов, младшее первым, в виде "%08x" через пробел.
pub fn encode<const LIMBS: usize>(
    poly: &BinaryPolynomial<LIMBS>,
    words: usize,
) -> Result<String, FactorError> {
    if !poly.is_zero() && poly.degree() >= words * 32 {
        return Err(FactorError::FactorTooWide {
            degree: poly.degree(),
            words,
        });
    }

    let hex: Vec<String> = poly
        .split(words)
        .iter()
        .rev()
        .map(|word| format!("{:08x}", word))
        .collect();
    Ok(hex.join(" "))
}

/// Полный текст задачи: первая строка: S, вторая: слова.
pub fn parse_problem<const LIMBS: usize>(input: &str) -> Result<Decoded<LIMBS>, FactorError> {
    let mut lines = input.lines().filter(|line| !line.trim().is_empty());

    let width_line = lines
        .next()
        .ok_or_else(|| FactorError::MalformedInput("missing bit width line".to_string()))?;
    let bit_width: usize = width_line.trim().parse().map_err(|_| {
        FactorError::MalformedInput(format!("bit width {:?} is not a number", width_line.trim()))
    })?;

    let words_line = lines
        .next()
        .ok_or_else(|| FactorError::MalformedInput("missing word line".to_string()))?;
    decode(bit_width, words_line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gf2_poly::Poly;

    #[test]
    fn parse_word_rejects_signs() {
        assert!(parse_word("+0000001", 0).is_err());
        assert_eq!(parse_word("0000abcd", 0).unwrap(), 0xabcd);
        assert!(parse_word("abc", 0).is_err());
    }

    #[test]
    fn decoded_word_counts() {
        let decoded: Decoded = decode(64, "00000001 00000000 00000000 00000000").unwrap();
        assert_eq!(decoded.input_words(), 4);
        assert_eq!(decoded.factor_words(), 2);
        assert_eq!(decoded.value, Poly::one());
    }
}
