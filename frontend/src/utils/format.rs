use rust_decimal::Decimal;

/// Formats an amount with comma thousands separators, keeping any
/// fractional part as is: `5000` -> `5,000`, `1234567.5` -> `1,234,567.5`.
pub fn thousands(amount: Decimal) -> String {
  let plain = amount.normalize().to_string();
  let (sign, unsigned) = match plain.strip_prefix('-') {
    Some(rest) => ("-", rest),
    None => ("", plain.as_str())
  };
  let (int_part, frac_part) = match unsigned.split_once('.') {
    Some((int_part, frac_part)) => (int_part, Some(frac_part)),
    None => (unsigned, None)
  };

  let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
  for (i, digit) in int_part.chars().enumerate() {
    if i > 0 && (int_part.len() - i) % 3 == 0 {
      grouped.push(',');
    }
    grouped.push(digit);
  }

  match frac_part {
    Some(frac) => format!("{}{}.{}", sign, grouped, frac),
    None => format!("{}{}", sign, grouped)
  }
}
