#[teamcity_test::test]
fn default_level() -> Result<(), ()> {
  log::info!("Hello, world!");
  log::warn!("Hello, world!");
  log::error!("Hello, world!");
  log::debug!("Hello, world!");
  log::trace!("Hello, world!");

  Ok(())
}

#[teamcity_test::test(debug)]
fn explicit_level() {
  log::debug!("Hello, world!");
  log::trace!("Hello, world!");
}

#[teamcity_test::test(info)]
#[should_panic(expected = "boom")]
fn keeps_other_attributes() {
  panic!("boom");
}
