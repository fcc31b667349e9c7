use soroban_sdk::String;

use crate::types::{MAX_DESCRIPTION_LEN, MAX_SERIAL_NUMBER_LEN, MAX_STAGE_NAME_LEN};

// Validate serial number length
pub fn is_valid_serial_number(serial_number: &String) -> bool {
    serial_number.len() > 0 && serial_number.len() <= MAX_SERIAL_NUMBER_LEN
}

// Validate description length
pub fn is_valid_description(description: &String) -> bool {
    description.len() > 0 && description.len() <= MAX_DESCRIPTION_LEN
}

// Validate stage name length
pub fn is_valid_stage_name(name: &String) -> bool {
    name.len() > 0 && name.len() <= MAX_STAGE_NAME_LEN
}

#[cfg(test)]
mod tests {
    use super::*;
    use soroban_sdk::Env;

    fn string_of_len(env: &Env, len: usize) -> String {
        let bytes = [b'a'; 256];
        String::from_str(env, core::str::from_utf8(&bytes[..len]).unwrap())
    }

    #[test]
    fn test_serial_number_bounds() {
        let env = Env::default();
        assert!(!is_valid_serial_number(&string_of_len(&env, 0)));
        assert!(is_valid_serial_number(&string_of_len(&env, 1)));
        assert!(is_valid_serial_number(&string_of_len(&env, 50)));
        assert!(!is_valid_serial_number(&string_of_len(&env, 51)));
    }

    #[test]
    fn test_description_bounds() {
        let env = Env::default();
        assert!(!is_valid_description(&string_of_len(&env, 0)));
        assert!(is_valid_description(&string_of_len(&env, 1)));
        assert!(is_valid_description(&string_of_len(&env, 200)));
        assert!(!is_valid_description(&string_of_len(&env, 201)));
    }

    #[test]
    fn test_stage_name_bounds() {
        let env = Env::default();
        assert!(!is_valid_stage_name(&string_of_len(&env, 0)));
        assert!(is_valid_stage_name(&string_of_len(&env, 50)));
        assert!(!is_valid_stage_name(&string_of_len(&env, 51)));
    }
}
