fn main() {
    multiversx_sc_meta_lib::cli_main::<qf_tally::AbiProvider>();
}
