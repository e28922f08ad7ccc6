mod common;

use common::big_dec;
use multiversx_sc_scenario::imports::*;
use qf_tally::poseidon::{field_modulus, hash3, hash5, hash_left_right, is_field_element};

fn n(value: u64) -> BigUint<StaticApi> {
    BigUint::from(value)
}

#[test]
fn hash_left_right_matches_circomlib() {
    assert_eq!(
        hash_left_right(&n(1), &n(2)),
        big_dec("7853200120776062878684798364095072458815029376092732009249414926327459813530")
    );
    assert_eq!(
        hash_left_right(&n(3), &n(4)),
        big_dec("14763215145315200506921711489642608356394854266165572616578112107564877678998")
    );
}

#[test]
fn hash3_matches_circomlib() {
    assert_eq!(
        hash3([&n(1), &n(2), &n(3)]),
        big_dec("6542985608222806190361240322586112750744169038454362455181422643027100751666")
    );
}

#[test]
fn hash5_matches_circomlib() {
    assert_eq!(
        hash5([&n(1), &n(2), &n(0), &n(0), &n(0)]),
        big_dec("1018317224307729531995786483840663576608797660851238720571059489595066344487")
    );
    assert_eq!(
        hash5([&n(3), &n(4), &n(5), &n(10), &n(23)]),
        big_dec("13034429309846638789535561449942021891039729847501137143363028890275222221409")
    );
}

#[test]
fn hash_is_order_sensitive() {
    assert_ne!(hash_left_right(&n(1), &n(2)), hash_left_right(&n(2), &n(1)));
}

#[test]
fn field_membership() {
    let p = field_modulus::<StaticApi>();
    assert!(is_field_element(&(&p - &n(1))));
    assert!(!is_field_element(&p));
    assert!(!is_field_element(&(&p + &n(1))));
    assert!(is_field_element(&n(0)));
}
