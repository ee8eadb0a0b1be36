use crate::PathError;
use alloc::{string::ToString, vec::Vec};
use core::{fmt, str::FromStr};

pub const HARDENED: u32 = 0x8000_0000;
pub const MAX_PATH_DEPTH: usize = 10;

/// A BIP32 style derivation path as sent in the request, e.g. `m/1852'/1815'/0'/0/0`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct DerivationPath(Vec<u32>);

impl DerivationPath {
    pub fn new(components: Vec<u32>) -> Result<Self, PathError> {
        if components.is_empty() {
            return Err(PathError::Empty);
        }
        if components.len() > MAX_PATH_DEPTH {
            return Err(PathError::TooDeep(components.len()));
        }
        Ok(Self(components))
    }

    pub fn components(&self) -> &[u32] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for DerivationPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "m")?;
        for component in &self.0 {
            if component & HARDENED != 0 {
                write!(f, "/{}'", component & !HARDENED)?;
            } else {
                write!(f, "/{}", component)?;
            }
        }
        Ok(())
    }
}

impl FromStr for DerivationPath {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split('/');
        if parts.next() != Some("m") {
            return Err(PathError::Parse(s.to_string()));
        }
        let components = parts
            .map(|part| {
                let (digits, hardened) = match part.strip_suffix(['\'', 'h']) {
                    Some(digits) => (digits, true),
                    None => (part, false),
                };
                let index = digits
                    .parse::<u32>()
                    .ok()
                    .filter(|index| index & HARDENED == 0)
                    .ok_or_else(|| PathError::Parse(part.to_string()))?;
                Ok(if hardened { index | HARDENED } else { index })
            })
            .collect::<Result<Vec<_>, PathError>>()?;
        Self::new(components)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn displays_hardened_components_with_a_tick() {
        let path = DerivationPath::new(vec![
            1852 | HARDENED,
            1815 | HARDENED,
            HARDENED,
            0,
            7,
        ])
        .unwrap();
        assert_eq!(path.to_string(), "m/1852'/1815'/0'/0/7");
    }

    #[test]
    fn parses_what_it_displays() {
        let path: DerivationPath = "m/44'/1815h/0'/1/2".parse().unwrap();
        assert_eq!(
            path.components(),
            &[44 | HARDENED, 1815 | HARDENED, HARDENED, 1, 2]
        );
        assert_eq!(path.to_string(), "m/44'/1815'/0'/1/2");
    }

    #[test]
    fn malformed_paths_are_rejected() {
        assert_eq!(DerivationPath::new(vec![]), Err(PathError::Empty));
        assert_eq!(
            DerivationPath::new(vec![0; 11]),
            Err(PathError::TooDeep(11))
        );
        assert_eq!("m".parse::<DerivationPath>(), Err(PathError::Empty));
        assert!("44'/0'".parse::<DerivationPath>().is_err());
        assert!("m/x".parse::<DerivationPath>().is_err());
        assert!("m/2147483648".parse::<DerivationPath>().is_err());
    }
}
