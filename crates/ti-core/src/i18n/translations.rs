//! The translation table.

use once_cell::sync::Lazy;
use std::collections::HashMap;

use super::Entry;

macro_rules! entries {
    ($($key:literal => ($en:literal, $id:literal),)*) => {
        [$(($key, Entry { en: $en, id: $id }),)*]
    };
}

static TABLE: Lazy<HashMap<&'static str, Entry>> = Lazy::new(|| {
    entries! {
        // Common terms
        "common.termsAgreement" => ("By creating an account, you agree to our", "Dengan membuat akun, Anda menyetujui"),
        "common.termsOfService" => ("Terms of Service", "Ketentuan Layanan"),
        "common.privacyPolicy" => ("Privacy Policy", "Kebijakan Privasi"),
        "common.and" => ("and", "dan"),
        "app.name" => ("Travelintrips", "Travelintrips"),
        "common.loading" => ("Loading...", "Memuat..."),
        "common.error" => ("An error occurred", "Terjadi kesalahan"),
        "common.success" => ("Success", "Berhasil"),
        "common.required" => ("Required", "Wajib"),
        "common.requiredFields" => ("Required fields", "Kolom wajib diisi"),

        // Auth
        "auth.signin" => ("Sign in", "Masuk"),
        "auth.signin.title" => ("Sign in to your account", "Masuk ke akun Anda"),
        "auth.signin.subtitle" => ("Enter your email and password to sign in", "Masukkan email dan kata sandi Anda untuk masuk"),
        "auth.signup" => ("Sign up", "Daftar"),
        "auth.signout" => ("Sign out", "Keluar"),
        "auth.email" => ("Email", "Email"),
        "auth.password" => ("Password", "Kata Sandi"),
        "auth.forgotPassword" => ("Forgot password?", "Lupa kata sandi?"),
        "auth.noAccount" => ("Don't have an account?", "Belum punya akun?"),
        "auth.hasAccount" => ("Already have an account?", "Sudah punya akun?"),
        "auth.signingIn" => ("Signing in...", "Sedang masuk..."),
        "auth.loginSuccess" => ("Login successful! Redirecting...", "Login berhasil! Mengalihkan..."),

        // Registration
        "register.title" => ("Create an account", "Buat akun"),
        "register.subtitle" => ("Enter your information to create an account", "Masukkan informasi Anda untuk membuat akun"),
        "register.creatingAccount" => ("Creating account...", "Membuat akun..."),
        "register.createAccount" => ("Create account", "Buat akun"),
        "register.success" => ("Registration successful! Your account has been created.", "Pendaftaran berhasil! Akun Anda telah dibuat."),

        // Form fields
        "form.firstName" => ("First Name", "Nama Depan"),
        "form.lastName" => ("Last Name", "Nama Belakang"),
        "form.fullName" => ("Full Name", "Nama Lengkap"),
        "form.phoneNumber" => ("Phone Number", "Nomor Telepon"),
        "form.familyPhoneNumber" => ("Family Phone Number", "Nomor Telepon Keluarga"),
        "form.ktpAddress" => ("KTP Address", "Alamat KTP"),
        "form.ktpNumber" => ("KTP Number", "Nomor KTP"),
        "form.licenseNumber" => ("Licence Number", "Nomor SIM"),
        "form.licenseExpiry" => ("SIM/License Expiry Date", "Tanggal Kadaluarsa SIM"),
        "form.religion" => ("Religion", "Agama"),
        "form.ethnicity" => ("Ethnicity", "Etnis"),
        "form.education" => ("Education", "Pendidikan"),

        // Tabs
        "tabs.personal" => ("Personal", "Data Pribadi"),
        "tabs.contact" => ("Contact", "Kontak"),
        "tabs.vehicle" => ("Vehicle", "Kendaraan"),
        "tabs.documents" => ("Documents", "Dokumen"),

        // Vehicle
        "vehicle.name" => ("Vehicle Name", "Nama Kendaraan"),
        "vehicle.type" => ("Vehicle Type", "Jenis Kendaraan"),
        "vehicle.brand" => ("Vehicle Brand", "Merek Kendaraan"),
        "vehicle.licensePlate" => ("License Plate", "Plat Nomor"),
        "vehicle.year" => ("Vehicle Year", "Tahun Kendaraan"),
        "vehicle.color" => ("Vehicle Color", "Warna Kendaraan"),
        "vehicle.status" => ("Vehicle Status", "Status Kendaraan"),
        "vehicle.photo" => ("Vehicle Photo", "Foto Kendaraan"),

        // Documents
        "document.selfiePhoto" => ("Selfie Photo", "Foto Selfie"),
        "document.familyCard" => ("Family Card", "Kartu Keluarga"),
        "document.ktpDocument" => ("KTP Document", "Dokumen KTP"),
        "document.simDocument" => ("SIM", "SIM"),
        "document.skckDocument" => ("SKCK Document", "Dokumen SKCK"),

        // Buttons
        "button.previous" => ("Previous", "Sebelumnya"),
        "button.next" => ("Next", "Selanjutnya"),
        "button.submit" => ("Submit", "Kirim"),

        // Roles
        "role.label" => ("Role", "Peran"),
        "role.select" => ("Select a role", "Pilih peran"),
        "religion.select" => ("Select Religion", "Pilih Agama"),
        "ethnicity.select" => ("Select Ethnicity", "Pilih Suku"),
        "education.select" => ("Select Education", "Pilih Pendidikan"),
        "role.staffAdmin" => ("Staff Admin", "Staf Admin"),
        "role.admin" => ("Admin", "Admin"),
        "role.staffTrips" => ("Staff Trips", "Staf Perjalanan"),
        "role.staffTraffic" => ("Staff Traffic", "Staf Lalu Lintas"),
        "role.driverPerusahaan" => ("Driver Perusahaan", "Pengemudi Perusahaan"),
        "role.driverMitra" => ("Driver Mitra", "Pengemudi Mitra"),

        // Language
        "language.select" => ("Language", "Bahasa"),
        "language.english" => ("English", "Inggris"),
        "language.indonesian" => ("Indonesian", "Indonesia"),
    }
    .into_iter()
    .collect()
});

/// The full key → entry table.
pub fn table() -> &'static HashMap<&'static str, Entry> {
    &TABLE
}
